use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::FieldError;

/// A supplier the shop buys stock from, with running balance totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub telegram_link: Option<String>,
    #[serde(default)]
    pub whatsapp_link: Option<String>,
    #[serde(default)]
    pub total_paid: Decimal,
    #[serde(default)]
    pub total_withdraw: Decimal,
    #[serde(default)]
    pub total_due: Decimal,
}

/// Supplier fields the operator edits before create or update.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDraft {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_link: Option<String>,
    pub total_paid: Decimal,
    pub total_withdraw: Decimal,
    pub total_due: Decimal,
}

impl SupplierDraft {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "name is required"));
        }
        if self.phone.trim().is_empty() {
            errors.push(FieldError::new("phone", "phone number is required"));
        }
        if self.total_paid < Decimal::ZERO {
            errors.push(FieldError::new("totalPaid", "total paid cannot be negative"));
        }
        if self.total_withdraw < Decimal::ZERO {
            errors.push(FieldError::new(
                "totalWithdraw",
                "total withdraw cannot be negative",
            ));
        }
        if self.total_due < Decimal::ZERO {
            errors.push(FieldError::new("totalDue", "total due cannot be negative"));
        }

        errors
    }
}
