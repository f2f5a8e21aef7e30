#[cfg(test)]
mod tests {
    use crate::splits::netting::compute_net_debts;
    use crate::splits::{Debt, Interaction, InteractionShare};
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use proptest::prelude::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn share(participant: &str, owed_cents: i64) -> InteractionShare {
        InteractionShare {
            participant: participant.to_string(),
            owed_cents,
        }
    }

    fn interaction(
        payer: &str,
        amount_cents: i64,
        date: NaiveDate,
        shares: Vec<InteractionShare>,
    ) -> Interaction {
        Interaction {
            id: format!("int-{}-{}-{}", payer, amount_cents, date),
            sheet_id: "sheet-1".to_string(),
            label: "test".to_string(),
            payer: payer.to_string(),
            amount_cents,
            date,
            is_refunded: false,
            shares,
            created_at: Utc::now().naive_utc(),
        }
    }

    fn june(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn empty_input_yields_zero_totals_and_no_debts() {
        let stats = compute_net_debts(&[], now());

        assert!(stats.debts.is_empty());
        assert_eq!(stats.total_cents, 0);
        assert_eq!(stats.total_this_month_cents, 0);
    }

    #[test]
    fn nets_bidirectional_debts_into_one_entry() {
        // A pays 100, B owes 50; B pays 60, A owes 30 -> B owes A 20.
        let interactions = vec![
            interaction("A", 100_00, june(1), vec![share("B", 50_00)]),
            interaction("B", 60_00, june(2), vec![share("A", 30_00)]),
        ];

        let stats = compute_net_debts(&interactions, now());

        assert_eq!(
            stats.debts,
            vec![Debt {
                debtor: "B".to_string(),
                creditor: "A".to_string(),
                amount_cents: 20_00,
            }]
        );
        assert_eq!(stats.total_cents, 160_00);
    }

    #[test]
    fn zero_net_pairs_are_omitted() {
        let interactions = vec![
            interaction("A", 50_00, june(1), vec![share("B", 25_00)]),
            interaction("B", 50_00, june(2), vec![share("A", 25_00)]),
        ];

        let stats = compute_net_debts(&interactions, now());

        assert!(stats.debts.is_empty());
        assert_eq!(stats.total_cents, 100_00);
    }

    #[test]
    fn refunded_interactions_do_not_participate() {
        let mut refunded = interaction("A", 100_00, june(1), vec![share("B", 50_00)]);
        refunded.is_refunded = true;
        let interactions = vec![
            refunded,
            interaction("A", 40_00, june(2), vec![share("B", 20_00)]),
        ];

        let stats = compute_net_debts(&interactions, now());

        assert_eq!(stats.debts[0].amount_cents, 20_00);
        assert_eq!(stats.total_cents, 40_00);
    }

    #[test]
    fn payer_share_entries_are_ignored() {
        // Self-inclusion as a payee entry must not create a self-debt.
        let interactions = vec![interaction(
            "A",
            100_00,
            june(1),
            vec![share("A", 50_00), share("B", 50_00)],
        )];

        let stats = compute_net_debts(&interactions, now());

        assert_eq!(
            stats.debts,
            vec![Debt {
                debtor: "B".to_string(),
                creditor: "A".to_string(),
                amount_cents: 50_00,
            }]
        );
    }

    #[test]
    fn monthly_total_filters_by_calendar_month_of_reference() {
        let interactions = vec![
            interaction("A", 10_00, june(1), vec![share("B", 5_00)]),
            interaction("A", 20_00, NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(), vec![share("B", 10_00)]),
            interaction("A", 40_00, NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(), vec![share("B", 20_00)]),
        ];

        let stats = compute_net_debts(&interactions, now());

        assert_eq!(stats.total_cents, 70_00);
        assert_eq!(stats.total_this_month_cents, 10_00);
    }

    #[test]
    fn three_way_netting_keeps_pairs_independent() {
        let interactions = vec![
            interaction("A", 90_00, june(1), vec![share("B", 30_00), share("C", 30_00)]),
            interaction("C", 10_00, june(2), vec![share("A", 10_00)]),
        ];

        let stats = compute_net_debts(&interactions, now());

        // BTreeMap accumulator: deterministic lexicographic debtor order.
        assert_eq!(
            stats.debts,
            vec![
                Debt {
                    debtor: "B".to_string(),
                    creditor: "A".to_string(),
                    amount_cents: 30_00,
                },
                Debt {
                    debtor: "C".to_string(),
                    creditor: "A".to_string(),
                    amount_cents: 20_00,
                },
            ]
        );
    }

    // --- Property tests ---

    fn arb_interactions() -> impl Strategy<Value = Vec<Interaction>> {
        let names = prop::sample::select(vec!["A", "B", "C", "D"]);
        let single = (names.clone(), names, 1i64..100_000, 1u32..28, any::<bool>()).prop_map(
            |(payer, payee, owed, day, refunded)| {
                let mut i = interaction(payer, owed, june(day), vec![share(payee, owed)]);
                i.is_refunded = refunded;
                i
            },
        );
        proptest::collection::vec(single, 0..30)
    }

    fn swap_roles(interactions: &[Interaction], a: &str, b: &str) -> Vec<Interaction> {
        let rename = |name: &str| -> String {
            if name == a {
                b.to_string()
            } else if name == b {
                a.to_string()
            } else {
                name.to_string()
            }
        };
        interactions
            .iter()
            .map(|i| {
                let mut swapped = i.clone();
                swapped.payer = rename(&i.payer);
                swapped.shares = i
                    .shares
                    .iter()
                    .map(|s| InteractionShare {
                        participant: rename(&s.participant),
                        owed_cents: s.owed_cents,
                    })
                    .collect();
                swapped
            })
            .collect()
    }

    fn net_between(debts: &[Debt], a: &str, b: &str) -> i64 {
        debts
            .iter()
            .map(|d| {
                if d.debtor == a && d.creditor == b {
                    d.amount_cents
                } else if d.debtor == b && d.creditor == a {
                    -d.amount_cents
                } else {
                    0
                }
            })
            .sum()
    }

    proptest! {
        #[test]
        fn swapping_roles_negates_the_net_debt(interactions in arb_interactions()) {
            let stats = compute_net_debts(&interactions, now());
            let swapped = compute_net_debts(&swap_roles(&interactions, "A", "B"), now());
            prop_assert_eq!(
                net_between(&stats.debts, "A", "B"),
                -net_between(&swapped.debts, "A", "B")
            );
        }

        #[test]
        fn netting_preserves_per_person_balances(interactions in arb_interactions()) {
            let stats = compute_net_debts(&interactions, now());
            for person in ["A", "B", "C", "D"] {
                let raw: i64 = interactions
                    .iter()
                    .filter(|i| !i.is_refunded)
                    .flat_map(|i| i.shares.iter().map(move |s| (i.payer.as_str(), s)))
                    .filter(|(payer, s)| s.participant != *payer)
                    .map(|(payer, s)| {
                        if payer == person {
                            s.owed_cents
                        } else if s.participant == person {
                            -s.owed_cents
                        } else {
                            0
                        }
                    })
                    .sum();
                let netted: i64 = stats
                    .debts
                    .iter()
                    .map(|d| {
                        if d.creditor == person {
                            d.amount_cents
                        } else if d.debtor == person {
                            -d.amount_cents
                        } else {
                            0
                        }
                    })
                    .sum();
                prop_assert_eq!(raw, netted, "balance drift for {}", person);
            }
        }

        #[test]
        fn emitted_debts_are_positive_and_unique_per_pair(interactions in arb_interactions()) {
            let stats = compute_net_debts(&interactions, now());
            let mut seen = std::collections::BTreeSet::new();
            for debt in &stats.debts {
                prop_assert!(debt.amount_cents > 0);
                let key = if debt.debtor <= debt.creditor {
                    (debt.debtor.clone(), debt.creditor.clone())
                } else {
                    (debt.creditor.clone(), debt.debtor.clone())
                };
                prop_assert!(seen.insert(key), "pair emitted twice");
            }
        }
    }
}
