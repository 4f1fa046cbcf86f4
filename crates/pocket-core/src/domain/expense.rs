//! Expense Record
//!
//! A named amount due on a date, tracked as unpaid or paid.
//! `overdue` and `void` are accepted from storage but never produced here.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::record::Record;
use super::required;
use crate::error::{StoreError, StoreResult};

/// Date format of `<input type="date">` and of the persisted `date` field
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    #[default]
    Unpaid,
    Paid,
    Overdue,
    Void,
}

impl ExpenseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseStatus::Unpaid => "unpaid",
            ExpenseStatus::Paid => "paid",
            ExpenseStatus::Overdue => "overdue",
            ExpenseStatus::Void => "void",
        }
    }
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An expense as persisted under `expenseList`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseItem {
    pub id: u32,
    pub name: String,
    /// Older saves wrote the raw input text, so both forms load.
    #[serde(deserialize_with = "amount_from_number_or_text")]
    pub amount: f64,
    /// Blank in rows the legacy widget saved without a date.
    #[serde(default, deserialize_with = "date_or_blank")]
    pub date: Option<NaiveDate>,
    /// Set when the expense is marked paid, cleared when marked unpaid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<NaiveDate>,
    #[serde(default)]
    pub expense_status: ExpenseStatus,
}

impl ExpenseItem {
    pub fn is_unpaid(&self) -> bool {
        self.expense_status == ExpenseStatus::Unpaid
    }

    pub fn is_paid(&self) -> bool {
        self.expense_status == ExpenseStatus::Paid
    }

    /// Exact amount as text for pre-filling an edit form
    pub fn amount_input(&self) -> String {
        self.amount.to_string()
    }

    /// Date as `YYYY-MM-DD`, empty when none was recorded
    pub fn date_input(&self) -> String {
        self.date.map(|d| d.to_string()).unwrap_or_default()
    }
}

impl Record for ExpenseItem {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Number(f64),
    Text(String),
}

fn amount_from_number_or_text<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match AmountRepr::deserialize(deserializer)? {
        AmountRepr::Number(n) => Ok(n),
        // A blank amount reads as 0, as `Number("")` did
        AmountRepr::Text(s) if s.trim().is_empty() => Ok(0.0),
        AmountRepr::Text(s) => parse_amount(&s).map_err(serde::de::Error::custom),
    }
}

fn date_or_blank<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => parse_date(&s).map(Some).map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Parse the text of a numeric input. Must be present and finite.
pub fn parse_amount(raw: &str) -> StoreResult<f64> {
    let trimmed = required("amount", raw)?;
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(StoreError::InvalidField {
            field: "amount",
            value: trimmed,
        }),
    }
}

/// Parse the text of a date input (`YYYY-MM-DD`).
pub fn parse_date(raw: &str) -> StoreResult<NaiveDate> {
    let trimmed = required("date", raw)?;
    NaiveDate::parse_from_str(&trimmed, DATE_FORMAT).map_err(|_| StoreError::InvalidField {
        field: "date",
        value: trimmed,
    })
}

/// Sum of amounts over records still `unpaid`
pub fn total_unpaid(items: &[ExpenseItem]) -> f64 {
    items
        .iter()
        .filter(|e| e.is_unpaid())
        .map(|e| e.amount)
        .sum()
}

/// Amount for display: rounded to cents, no trailing zeros.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount * 100.0).round() / 100.0;
    // Avoid "-0"
    if cents == 0.0 {
        return "0".to_string();
    }
    format!("{}", cents)
}

/// Validated fields of the add form
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    pub fn parse(name: &str, amount: &str, date: &str) -> StoreResult<Self> {
        Ok(Self {
            name: required("name", name)?,
            amount: parse_amount(amount)?,
            date: parse_date(date)?,
        })
    }

    /// New unpaid expense with the allocated id.
    pub fn into_item(self, id: u32) -> ExpenseItem {
        ExpenseItem {
            id,
            name: self.name,
            amount: self.amount,
            date: Some(self.date),
            paid_date: None,
            expense_status: ExpenseStatus::Unpaid,
        }
    }
}

/// Validated fields of the detail view
#[derive(Debug, Clone, PartialEq)]
pub struct ExpensePatch {
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub paid: bool,
}

impl ExpensePatch {
    pub fn parse(name: &str, amount: &str, date: &str, paid: bool) -> StoreResult<Self> {
        let draft = ExpenseDraft::parse(name, amount, date)?;
        Ok(Self {
            name: draft.name,
            amount: draft.amount,
            date: draft.date,
            paid,
        })
    }

    /// Apply to a stored expense. `today` stamps `paid_date` on the
    /// unpaid-to-paid transition; an already paid expense keeps its stamp.
    pub(crate) fn apply(self, item: &mut ExpenseItem, today: NaiveDate) {
        item.name = self.name;
        item.amount = self.amount;
        item.date = Some(self.date);
        if self.paid {
            if !item.is_paid() || item.paid_date.is_none() {
                item.paid_date = Some(today);
            }
            item.expense_status = ExpenseStatus::Paid;
        } else {
            item.expense_status = ExpenseStatus::Unpaid;
            item.paid_date = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    fn expense(id: u32, amount: f64, status: ExpenseStatus) -> ExpenseItem {
        ExpenseItem {
            id,
            name: format!("Expense {}", id),
            amount,
            date: Some(day("2024-03-01")),
            paid_date: None,
            expense_status: status,
        }
    }

    #[test]
    fn test_total_unpaid() {
        let items = vec![
            expense(1, 10.0, ExpenseStatus::Unpaid),
            expense(2, 5.0, ExpenseStatus::Paid),
            expense(3, 7.0, ExpenseStatus::Unpaid),
        ];
        assert_eq!(total_unpaid(&items), 17.0);
        assert_eq!(total_unpaid(&[]), 0.0);
    }

    #[test]
    fn test_overdue_and_void_not_in_total() {
        let items = vec![
            expense(1, 4.0, ExpenseStatus::Overdue),
            expense(2, 6.0, ExpenseStatus::Void),
            expense(3, 1.5, ExpenseStatus::Unpaid),
        ];
        assert_eq!(total_unpaid(&items), 1.5);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(17.0), "17");
        assert_eq!(format_amount(0.1 + 0.2), "0.3");
        assert_eq!(format_amount(12.346), "12.35");
        assert_eq!(format_amount(-0.001), "0");
    }

    #[test]
    fn test_draft_validation() {
        let draft = ExpenseDraft::parse(" Rent ", "950.5", "2024-04-01").unwrap();
        assert_eq!(draft.name, "Rent");
        assert_eq!(draft.amount, 950.5);
        assert_eq!(draft.date, day("2024-04-01"));

        assert_eq!(
            ExpenseDraft::parse("", "1", "2024-04-01"),
            Err(StoreError::MissingField("name"))
        );
        assert_eq!(
            ExpenseDraft::parse("Rent", " ", "2024-04-01"),
            Err(StoreError::MissingField("amount"))
        );
        assert_eq!(
            ExpenseDraft::parse("Rent", "lots", "2024-04-01"),
            Err(StoreError::InvalidField {
                field: "amount",
                value: "lots".into()
            })
        );
        assert_eq!(
            ExpenseDraft::parse("Rent", "1", "04/01/2024"),
            Err(StoreError::InvalidField {
                field: "date",
                value: "04/01/2024".into()
            })
        );
    }

    #[test]
    fn test_new_item_is_unpaid() {
        let item = ExpenseDraft::parse("Gym", "30", "2024-01-05").unwrap().into_item(9);
        assert_eq!(item.id, 9);
        assert!(item.is_unpaid());
        assert_eq!(item.paid_date, None);
    }

    #[test]
    fn test_patch_stamps_and_clears_paid_date() {
        let mut item = expense(1, 10.0, ExpenseStatus::Unpaid);

        ExpensePatch::parse("Power", "12", "2024-03-02", true)
            .unwrap()
            .apply(&mut item, day("2024-03-10"));
        assert!(item.is_paid());
        assert_eq!(item.paid_date, Some(day("2024-03-10")));
        assert_eq!(item.name, "Power");
        assert_eq!(item.amount, 12.0);

        // Saving again while paid keeps the original stamp
        ExpensePatch::parse("Power", "12", "2024-03-02", true)
            .unwrap()
            .apply(&mut item, day("2024-03-20"));
        assert_eq!(item.paid_date, Some(day("2024-03-10")));

        ExpensePatch::parse("Power", "12", "2024-03-02", false)
            .unwrap()
            .apply(&mut item, day("2024-03-21"));
        assert!(item.is_unpaid());
        assert_eq!(item.paid_date, None);
    }

    #[test]
    fn test_legacy_json_with_text_amount() {
        let json = r#"{"id":2,"name":"Phone","amount":"45.5","date":"2024-02-29","expenseStatus":"unpaid"}"#;
        let item: ExpenseItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.amount, 45.5);
        assert_eq!(item.paid_date, None);

        let saved = serde_json::to_string(&item).unwrap();
        assert_eq!(
            saved,
            r#"{"id":2,"name":"Phone","amount":45.5,"date":"2024-02-29","expenseStatus":"unpaid"}"#
        );
    }

    #[test]
    fn test_legacy_json_with_blank_fields() {
        let json = r#"{"id":2,"name":"","amount":"","date":"","expenseStatus":"unpaid"}"#;
        let item: ExpenseItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.amount, 0.0);
        assert_eq!(item.date, None);
        assert_eq!(item.date_input(), "");
    }

    #[test]
    fn test_legacy_json_with_garbage_amount_fails() {
        let json = r#"{"id":2,"name":"Phone","amount":"ten","date":"2024-02-29","expenseStatus":"unpaid"}"#;
        assert!(serde_json::from_str::<ExpenseItem>(json).is_err());
    }

    #[test]
    fn test_inputs_keep_exact_values() {
        let item = ExpenseDraft::parse("Tea", "12.345", "2024-06-01").unwrap().into_item(1);
        assert_eq!(item.amount_input(), "12.345");
        assert_eq!(item.date_input(), "2024-06-01");
        assert_eq!(format_amount(item.amount), "12.35");
    }
}
