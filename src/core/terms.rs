use chrono::{Days, NaiveDate};

use super::error::ValidationError;
use super::types::CreditTerm;

/// Payment due date: `issue + credit_days` calendar days (not business days).
pub fn due_date_from(issue: NaiveDate, credit_days: u32) -> NaiveDate {
    // Days::new cannot overflow NaiveDate's range for any u32 credit term
    // a form would accept; saturate rather than panic if it ever does.
    issue
        .checked_add_days(Days::new(u64::from(credit_days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Credit days equivalent to a due date: `max(0, due - issue)` in calendar
/// days. Negative spans clamp to zero rather than producing negative terms.
pub fn credit_days_from(issue: NaiveDate, due: NaiveDate) -> u32 {
    (due - issue).num_days().max(0) as u32
}

/// Strictly parse a display-format date, `DD/MM/YYYY`.
///
/// Both the shape (two digits, two digits, four digits, slash-separated)
/// and calendar validity are enforced; `31/02/2025` is rejected.
pub fn parse_display_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let s = raw.trim();
    let shape_ok = s.len() == 10
        && s.bytes()
            .enumerate()
            .all(|(i, b)| if i == 2 || i == 5 { b == b'/' } else { b.is_ascii_digit() });
    if !shape_ok {
        return Err(ValidationError::new(
            "due_date",
            format!("'{s}' is not a valid DD/MM/YYYY date"),
        ));
    }
    NaiveDate::parse_from_str(s, "%d/%m/%Y").map_err(|_| {
        ValidationError::new("due_date", format!("'{s}' is not a real calendar date"))
    })
}

/// Which credit-term field the user is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermField {
    CreditDays,
    DueDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorState {
    Idle,
    Editing(TermField),
}

/// Reconciles the two views of a credit term — the credit-days count and
/// the due date — with one authoritative edit direction per interaction.
///
/// While one field is being edited the other is not recomputed; committing
/// a valid value reconciles both and returns the editor to idle. A
/// rejected due-date commit restores the previous valid due date and
/// leaves the credit days untouched.
#[derive(Debug, Clone)]
pub struct CreditTermEditor {
    issue_date: NaiveDate,
    credit_days: u32,
    due_date: NaiveDate,
    state: EditorState,
}

impl CreditTermEditor {
    /// Start a booking-entry session with the credit-days view authoritative.
    pub fn new(issue_date: NaiveDate, credit_days: u32) -> Self {
        Self {
            issue_date,
            credit_days,
            due_date: due_date_from(issue_date, credit_days),
            state: EditorState::Idle,
        }
    }

    pub fn issue_date(&self) -> NaiveDate {
        self.issue_date
    }

    pub fn credit_days(&self) -> u32 {
        self.credit_days
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Field currently being edited, if any.
    pub fn editing(&self) -> Option<TermField> {
        match self.state {
            EditorState::Idle => None,
            EditorState::Editing(f) => Some(f),
        }
    }

    /// Current consistent credit term.
    pub fn term(&self) -> CreditTerm {
        CreditTerm {
            issue_date: self.issue_date,
            credit_days: self.credit_days,
        }
    }

    /// Change the issue date. The credit-days count stays authoritative and
    /// the due date moves with it.
    pub fn set_issue_date(&mut self, issue_date: NaiveDate) {
        self.issue_date = issue_date;
        self.due_date = due_date_from(issue_date, self.credit_days);
    }

    /// The user focused one of the two fields; reconciliation of the other
    /// is suspended until a valid value is committed.
    pub fn begin_edit(&mut self, field: TermField) {
        self.state = EditorState::Editing(field);
    }

    /// Abandon the current edit without changing either field.
    pub fn cancel(&mut self) {
        self.state = EditorState::Idle;
    }

    /// Commit an edited credit-days value; the due date is recomputed from it.
    pub fn commit_credit_days(&mut self, credit_days: u32) {
        self.credit_days = credit_days;
        self.due_date = due_date_from(self.issue_date, credit_days);
        self.state = EditorState::Idle;
    }

    /// Commit edited due-date text (called on blur).
    ///
    /// Valid input makes the due date authoritative for this edit cycle and
    /// recomputes the credit days (clamped at zero for due dates before the
    /// issue date). Invalid input is rejected: the previous valid due date
    /// stands and the credit days are not touched.
    pub fn commit_due_date_text(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.state = EditorState::Idle;
        let due = parse_display_date(raw)?;
        self.due_date = due;
        self.credit_days = credit_days_from(self.issue_date, due);
        Ok(())
    }
}
