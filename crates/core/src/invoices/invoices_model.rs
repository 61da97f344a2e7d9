use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::FieldError;
use crate::invoices::ledger::line_total;

/// Supplier reference embedded in invoice payloads.
///
/// Reads may carry the full supplier; writes only need the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRef {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One line of a purchase invoice on the wire.
///
/// The backend models the product link as a one-element `productIds`
/// array even though an item always references a single product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    #[serde(default)]
    pub product_ids: Vec<i64>,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

impl InvoiceItem {
    pub fn product_id(&self) -> Option<i64> {
        self.product_ids.first().copied()
    }
}

/// A purchase invoice as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: i64,
    #[serde(default)]
    pub supplier: Option<SupplierRef>,
    #[serde(default)]
    pub supplier_id: Option<i64>,
    pub invoice_date: NaiveDate,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub remaining_amount: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
}

impl Invoice {
    /// The supplier this invoice belongs to, whichever wire shape was used.
    pub fn owning_supplier(&self) -> Option<i64> {
        self.supplier.as_ref().map(|s| s.id).or(self.supplier_id)
    }
}

/// Invoice payload sent on create and update.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    pub supplier: SupplierRef,
    pub invoice_date: NaiveDate,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub remaining_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub items: Vec<InvoiceItem>,
}

/// One editable line of an invoice under construction.
#[derive(Debug, Clone, Default)]
pub struct InvoiceLine {
    pub product_id: Option<i64>,
    pub quantity: i64,
    pub unit_price: Decimal,
}

impl InvoiceLine {
    pub fn line_total(&self) -> Decimal {
        line_total(self.quantity, self.unit_price)
    }
}

/// An invoice being edited, before it is turned into a wire payload.
#[derive(Debug, Clone, Default)]
pub struct InvoiceDraft {
    pub supplier_id: Option<i64>,
    pub invoice_date: Option<NaiveDate>,
    pub paid_amount: Decimal,
    pub notes: Option<String>,
    pub lines: Vec<InvoiceLine>,
}

impl InvoiceDraft {
    /// Sum of every line total, including lines with no product yet.
    pub fn total_amount(&self) -> Decimal {
        self.lines.iter().map(InvoiceLine::line_total).sum()
    }

    /// Outstanding balance. Negative when the supplier was overpaid.
    pub fn remaining_amount(&self) -> Decimal {
        self.total_amount() - self.paid_amount
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.supplier_id.is_none() {
            errors.push(FieldError::new("supplierId", "supplier is required"));
        }
        if !self.lines.iter().any(|line| line.product_id.is_some()) {
            errors.push(FieldError::new(
                "items",
                "an invoice needs at least one item with a product",
            ));
        }
        if self.lines.iter().any(|line| line.quantity < 0) {
            errors.push(FieldError::new("items", "quantities cannot be negative"));
        }
        if self.lines.iter().any(|line| line.unit_price < Decimal::ZERO) {
            errors.push(FieldError::new("items", "unit prices cannot be negative"));
        }
        if self.paid_amount < Decimal::ZERO {
            errors.push(FieldError::new(
                "paidAmount",
                "paid amount cannot be negative",
            ));
        }

        errors
    }

    /// Builds the wire payload, dropping lines that never got a product.
    ///
    /// Totals are recomputed over the retained items only, so the payload
    /// stays consistent even when placeholder lines are discarded.
    pub fn to_payload(&self) -> std::result::Result<NewInvoice, Vec<FieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let items: Vec<InvoiceItem> = self
            .lines
            .iter()
            .filter_map(|line| {
                line.product_id.map(|product_id| InvoiceItem {
                    product_ids: vec![product_id],
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    total_price: line.line_total(),
                })
            })
            .collect();

        let total_amount: Decimal = items.iter().map(|item| item.total_price).sum();
        // validate() guarantees the supplier is present here.
        let supplier_id = self.supplier_id.unwrap_or_default();

        Ok(NewInvoice {
            supplier: SupplierRef {
                id: supplier_id,
                name: None,
            },
            invoice_date: self.invoice_date.unwrap_or_else(|| Utc::now().date_naive()),
            total_amount,
            paid_amount: self.paid_amount,
            remaining_amount: total_amount - self.paid_amount,
            notes: self.notes.clone(),
            items,
        })
    }
}
