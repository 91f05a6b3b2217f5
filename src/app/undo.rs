//! Undo-Protokoll des Editors.
//!
//! Jede Änderung an der Map beginnt mit `create_undo`, das eine neue
//! Transaktion öffnet. `before_fields_change` hält vor einer
//! Feld-Änderung fest, welches Element betroffen ist. Aeltere
//! Transaktionen werden über dem Limit verworfen.

use crate::core::ElementRef;
use crate::shared::options::UNDO_MAX_TRANSACTIONS;

/// Eine protokollierte Änderung.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoTransaction {
    /// Beschreibung der Änderung, z.B. "Set comment".
    pub label: String,
    /// Elemente, deren Felder in dieser Transaktion geändert wurden.
    pub changed: Vec<ElementRef>,
}

#[derive(Debug)]
pub struct UndoLog {
    transactions: Vec<UndoTransaction>,
    max_transactions: usize,
}

impl UndoLog {
    pub fn new(max_transactions: usize) -> Self {
        Self {
            transactions: Vec::new(),
            max_transactions: max_transactions.max(1),
        }
    }

    /// Öffnet eine neue Transaktion mit Beschreibung.
    pub fn create_undo(&mut self, label: &str) {
        log::debug!("Undo-Transaktion: {label}");
        self.transactions.push(UndoTransaction {
            label: label.to_string(),
            changed: Vec::new(),
        });

        if self.transactions.len() > self.max_transactions {
            let excess = self.transactions.len() - self.max_transactions;
            self.transactions.drain(..excess);
        }
    }

    /// Merkt ein Element vor, dessen Felder gleich geändert werden.
    /// Ohne offene Transaktion wird der Aufruf ignoriert.
    pub fn before_fields_change(&mut self, element: ElementRef) {
        if let Some(current) = self.transactions.last_mut() {
            if !current.changed.contains(&element) {
                current.changed.push(element);
            }
        } else {
            log::warn!(
                "Feld-Änderung an {} {} ohne offene Undo-Transaktion",
                element.kind,
                element.index
            );
        }
    }

    pub fn transactions(&self) -> &[UndoTransaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn last_label(&self) -> Option<&str> {
        self.transactions.last().map(|t| t.label.as_str())
    }
}

impl Default for UndoLog {
    fn default() -> Self {
        Self::new(UNDO_MAX_TRANSACTIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_transactions_with_changed_elements() {
        let mut undo = UndoLog::default();

        undo.create_undo("Set comment");
        undo.before_fields_change(ElementRef::sector(3));
        undo.before_fields_change(ElementRef::sector(3));

        assert_eq!(undo.transaction_count(), 1);
        assert_eq!(undo.last_label(), Some("Set comment"));
        assert_eq!(undo.transactions()[0].changed, vec![ElementRef::sector(3)]);
    }

    #[test]
    fn trims_oldest_transactions_over_limit() {
        let mut undo = UndoLog::new(2);

        undo.create_undo("erste");
        undo.create_undo("zweite");
        undo.create_undo("dritte");

        assert_eq!(undo.transaction_count(), 2);
        assert_eq!(undo.transactions()[0].label, "zweite");
        assert_eq!(undo.last_label(), Some("dritte"));
    }

    #[test]
    fn field_change_without_transaction_is_ignored() {
        let mut undo = UndoLog::default();

        undo.before_fields_change(ElementRef::thing(0));

        assert_eq!(undo.transaction_count(), 0);
    }
}
