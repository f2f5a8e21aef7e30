//! Debt netting engine.
//!
//! Given the interactions of a sheet (each with one payer and N weighted
//! payees), computes the net pairwise debt between every pair of
//! participants, collapsing bidirectional debts into a single signed amount.
//! Pure and synchronous; empty input yields zero totals and no debts.

use chrono::{DateTime, Datelike, Utc};
use std::collections::{BTreeMap, BTreeSet};

use super::splits_model::{Debt, Interaction, SheetStats};

/// Computes net debts and totals over the given interactions.
///
/// Only non-refunded interactions participate. `now` is the reference
/// instant for the current-month total; it is an explicit parameter so the
/// computation stays testable.
///
/// Pairs are netted once each: the accumulator is keyed `(debtor, creditor)`
/// in a `BTreeMap`, and each unordered pair is marked processed under its
/// lexicographically sorted key, so emission order is deterministic and
/// zero-net pairs are omitted entirely.
pub fn compute_net_debts(interactions: &[Interaction], now: DateTime<Utc>) -> SheetStats {
    let active: Vec<&Interaction> = interactions.iter().filter(|i| !i.is_refunded).collect();

    let mut owed: BTreeMap<(String, String), i64> = BTreeMap::new();
    for interaction in &active {
        for share in &interaction.shares {
            if share.participant == interaction.payer {
                continue;
            }
            *owed
                .entry((share.participant.clone(), interaction.payer.clone()))
                .or_insert(0) += share.owed_cents;
        }
    }

    let mut debts = Vec::new();
    let mut settled: BTreeSet<(String, String)> = BTreeSet::new();
    for (debtor, creditor) in owed.keys() {
        let pair = canonical_pair(debtor, creditor);
        if !settled.insert(pair) {
            continue;
        }

        let forward = owed.get(&(debtor.clone(), creditor.clone())).copied().unwrap_or(0);
        let backward = owed.get(&(creditor.clone(), debtor.clone())).copied().unwrap_or(0);
        let net = forward - backward;
        if net > 0 {
            debts.push(Debt {
                debtor: debtor.clone(),
                creditor: creditor.clone(),
                amount_cents: net,
            });
        } else if net < 0 {
            debts.push(Debt {
                debtor: creditor.clone(),
                creditor: debtor.clone(),
                amount_cents: -net,
            });
        }
    }

    let total_cents = active.iter().map(|i| i.amount_cents).sum();
    let reference = now.date_naive();
    let total_this_month_cents = active
        .iter()
        .filter(|i| i.date.year() == reference.year() && i.date.month() == reference.month())
        .map(|i| i.amount_cents)
        .sum();

    SheetStats {
        debts,
        total_cents,
        total_this_month_cents,
    }
}

fn canonical_pair(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}
