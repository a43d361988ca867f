//! Condition expressions evaluated against a work bundle's status.
//!
//! Grammar (keywords are case-insensitive, `AND` binds tighter than `OR`):
//!
//! ```text
//! expr   := clause ( OR clause )*
//! clause := term ( AND term )*
//! term   := Type | Kind:Type | Kind/Name:Type
//! ```
//!
//! A bare `Type` is satisfied by a work-level condition of that type whose
//! status is `True`. A scoped term is satisfied by the resource status list.

use std::fmt;
use std::str::FromStr;

use crate::error::{ClientError, ClientResult};
use crate::types::{Condition, WorkDetail};

/// Condition awaited when none is given.
pub const DEFAULT_CONDITION: &str = "Available";

/// One `Kind/Name:Type` term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionTerm {
    pub kind: Option<String>,
    pub name: Option<String>,
    pub condition_type: String,
}

impl ConditionTerm {
    fn parse(token: &str) -> ClientResult<Self> {
        let invalid = || ClientError::validation(format!("invalid condition term '{token}'"));

        let Some((scope, condition_type)) = token.split_once(':') else {
            return Ok(Self {
                kind: None,
                name: None,
                condition_type: token.to_string(),
            });
        };
        if condition_type.is_empty() || condition_type.contains(':') || scope.is_empty() {
            return Err(invalid());
        }

        let (kind, name) = match scope.split_once('/') {
            Some((kind, name)) if !kind.is_empty() && !name.is_empty() => {
                (kind.to_string(), Some(name.to_string()))
            }
            Some(_) => return Err(invalid()),
            None => (scope.to_string(), None),
        };

        Ok(Self {
            kind: Some(kind),
            name,
            condition_type: condition_type.to_string(),
        })
    }

    /// Whether this term holds for `detail`.
    pub fn is_met(&self, detail: &WorkDetail) -> bool {
        let holds = |conditions: &[Condition]| {
            conditions
                .iter()
                .any(|c| c.condition_type == self.condition_type && c.is_true())
        };

        let Some(kind) = &self.kind else {
            return holds(&detail.conditions);
        };

        detail
            .resource_status
            .iter()
            .filter(|rs| rs.kind.eq_ignore_ascii_case(kind))
            .filter(|rs| self.name.as_ref().is_none_or(|n| &rs.name == n))
            .any(|rs| holds(&rs.conditions))
    }
}

impl fmt::Display for ConditionTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.name) {
            (Some(kind), Some(name)) => write!(f, "{kind}/{name}:{}", self.condition_type),
            (Some(kind), None) => write!(f, "{kind}:{}", self.condition_type),
            _ => f.write_str(&self.condition_type),
        }
    }
}

/// A parsed condition expression in disjunctive normal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionExpr {
    clauses: Vec<Vec<ConditionTerm>>,
}

impl ConditionExpr {
    pub fn parse(input: &str) -> ClientResult<Self> {
        let mut clauses = Vec::new();
        let mut current = Vec::new();
        let mut expect_term = true;

        for token in input.split_whitespace() {
            let is_and = token.eq_ignore_ascii_case("AND");
            let is_or = token.eq_ignore_ascii_case("OR");

            if expect_term {
                if is_and || is_or {
                    return Err(ClientError::validation(format!(
                        "unexpected '{token}' in condition '{input}'"
                    )));
                }
                current.push(ConditionTerm::parse(token)?);
                expect_term = false;
            } else if is_and {
                expect_term = true;
            } else if is_or {
                clauses.push(std::mem::take(&mut current));
                expect_term = true;
            } else {
                return Err(ClientError::validation(format!(
                    "expected AND or OR before '{token}' in condition '{input}'"
                )));
            }
        }

        if current.is_empty() {
            return Err(if clauses.is_empty() {
                ClientError::validation("condition expression must not be empty")
            } else {
                ClientError::validation(format!("dangling operator in condition '{input}'"))
            });
        }
        if expect_term {
            return Err(ClientError::validation(format!(
                "dangling operator in condition '{input}'"
            )));
        }
        clauses.push(current);

        Ok(Self { clauses })
    }

    /// Whether the expression holds for `detail`.
    pub fn is_met(&self, detail: &WorkDetail) -> bool {
        self.clauses
            .iter()
            .any(|clause| clause.iter().all(|term| term.is_met(detail)))
    }

    pub fn clauses(&self) -> &[Vec<ConditionTerm>] {
        &self.clauses
    }
}

impl FromStr for ConditionExpr {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ConditionExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" OR ")?;
            }
            for (j, term) in clause.iter().enumerate() {
                if j > 0 {
                    f.write_str(" AND ")?;
                }
                write!(f, "{term}")?;
            }
        }
        Ok(())
    }
}
