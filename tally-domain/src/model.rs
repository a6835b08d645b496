use fxhash::FxHashSet;
use indexmap::IndexMap;

use crate::error::GroupBuildError;

/// Largest per-member residual still treated as settled.
///
/// Amounts are money; anything below half a cent is float noise from summing
/// large balances and never shows up at two decimals.
pub const RESIDUAL_TOLERANCE: f64 = 0.005;

/// A group member, identified by email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub email: String,
}

impl Member {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// One shared expense.
///
/// `expenses` maps member email to amount: positive for what a member paid,
/// negative for a member's share. The payers' own share is the negated sum of
/// all entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub description: Option<String>,
    pub expenses: IndexMap<String, f64>,
}

impl Transaction {
    pub fn new(id: impl Into<String>, expenses: IndexMap<String, f64>) -> Self {
        Self {
            id: id.into(),
            description: None,
            expenses,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn total(&self) -> f64 {
        self.expenses.values().sum()
    }

    pub fn largest_payment(&self) -> f64 {
        self.expenses
            .values()
            .copied()
            .reduce(f64::max)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    id: String,
    title: String,
    members: Vec<Member>,
    transactions: Vec<Transaction>,
    currency_code: Option<String>,
}

impl Group {
    /// Builds a group, checking that every expense belongs to a member.
    ///
    /// Member order is kept as given and defines the index order of the
    /// balance vector handed to the settlement core.
    pub fn try_new(
        id: impl Into<String>,
        title: impl Into<String>,
        members: Vec<Member>,
        transactions: Vec<Transaction>,
    ) -> Result<Self, GroupBuildError> {
        let mut emails: FxHashSet<&str> = FxHashSet::default();
        for member in &members {
            if !emails.insert(member.email.as_str()) {
                return Err(GroupBuildError::DuplicateMember {
                    email: member.email.clone(),
                });
            }
        }

        for transaction in &transactions {
            for (email, amount) in &transaction.expenses {
                if !emails.contains(email.as_str()) {
                    return Err(GroupBuildError::UnknownMember {
                        transaction: transaction.id.clone(),
                        email: email.clone(),
                    });
                }
                if !amount.is_finite() {
                    return Err(GroupBuildError::NonFiniteAmount {
                        transaction: transaction.id.clone(),
                        email: email.clone(),
                    });
                }
            }
        }

        Ok(Self {
            id: id.into(),
            title: title.into(),
            members,
            transactions,
            currency_code: None,
        })
    }

    pub fn with_currency_code(mut self, currency_code: impl Into<String>) -> Self {
        self.currency_code = Some(currency_code.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn currency_code(&self) -> Option<&str> {
        self.currency_code.as_deref()
    }

    pub fn member(&self, email: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.email == email)
    }

    /// Transactions ordered by their largest single payment, biggest first.
    pub fn transactions_by_largest_payment(&self) -> Vec<&Transaction> {
        let mut ordered: Vec<&Transaction> = self.transactions.iter().collect();
        ordered.sort_by(|lhs, rhs| rhs.largest_payment().total_cmp(&lhs.largest_payment()));
        ordered
    }
}

/// Totals for one member across a group.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MemberAmounts {
    pub paid: f64,
    /// Zero or negative for well-formed transactions
    pub share: f64,
}

impl MemberAmounts {
    pub fn net(self) -> f64 {
        self.paid + self.share
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AmountLimits {
    pub max_paid: f64,
    pub min_share: f64,
    /// `max(max_paid, |min_share|)`
    pub scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonBalance<'a> {
    pub member: &'a Member,
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpenseLine<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub amount: f64,
}

/// `from` pays `amount` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transfer<'a> {
    pub from: &'a Member,
    pub to: &'a Member,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupSettlement<'a> {
    pub balances: Vec<PersonBalance<'a>>,
    pub transfers: Vec<Transfer<'a>>,
    pub residual: Vec<f64>,
}

impl GroupSettlement<'_> {
    pub fn is_settled(&self) -> bool {
        tally_calc::is_settled(&self.residual, RESIDUAL_TOLERANCE)
    }

    pub fn residual_total(&self) -> f64 {
        self.residual.iter().sum()
    }
}
