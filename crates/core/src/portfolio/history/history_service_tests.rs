#[cfg(test)]
mod tests {
    use crate::errors::Result;
    use crate::instruments::{Instrument, InstrumentRepositoryTrait, InstrumentUpdate, NewInstrument};
    use crate::market_data::{NewQuote, Quote, QuoteRepositoryTrait};
    use crate::portfolio::history::{HistoryService, HistoryServiceTrait};
    use crate::portfolio::transactions::{
        NewTransaction, TradeSide, Transaction, TransactionRepositoryTrait, TransactionUpdate,
    };
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    struct SingleInstrumentRepository;

    #[async_trait::async_trait]
    impl InstrumentRepositoryTrait for SingleInstrumentRepository {
        async fn create(&self, _owner: &str, _new: NewInstrument) -> Result<Instrument> {
            unimplemented!("not needed for these tests")
        }

        async fn update(&self, _owner: &str, _update: InstrumentUpdate) -> Result<Instrument> {
            unimplemented!("not needed for these tests")
        }

        async fn delete(&self, _owner: &str, _instrument_id: &str) -> Result<usize> {
            unimplemented!("not needed for these tests")
        }

        fn get_by_id(&self, _owner: &str, _instrument_id: &str) -> Result<Instrument> {
            unimplemented!("not needed for these tests")
        }

        fn list(&self, owner: &str) -> Result<Vec<Instrument>> {
            Ok(vec![Instrument {
                id: "etf-1".to_string(),
                owner: owner.to_string(),
                symbol: "ETF1".to_string(),
                name: "Test ETF".to_string(),
                currency: "EUR".to_string(),
                annual_fee_percent: Decimal::ZERO,
                created_at: Utc::now().naive_utc(),
                updated_at: Utc::now().naive_utc(),
            }])
        }
    }

    struct FixedTransactionRepository;

    #[async_trait::async_trait]
    impl TransactionRepositoryTrait for FixedTransactionRepository {
        async fn create(&self, _owner: &str, _new: NewTransaction) -> Result<Transaction> {
            unimplemented!("not needed for these tests")
        }

        async fn update(&self, _owner: &str, _update: TransactionUpdate) -> Result<Transaction> {
            unimplemented!("not needed for these tests")
        }

        async fn delete(&self, _owner: &str, _transaction_id: &str) -> Result<String> {
            unimplemented!("not needed for these tests")
        }

        fn list_by_instrument(&self, _owner: &str, instrument_id: &str) -> Result<Vec<Transaction>> {
            Ok(vec![Transaction {
                id: "tx-1".to_string(),
                instrument_id: instrument_id.to_string(),
                date: date(1),
                side: TradeSide::Buy,
                quantity: dec!(2),
                price: dec!(10),
                operation_fee: Decimal::ZERO,
                notes: None,
                created_at: Utc::now().naive_utc(),
            }])
        }

        fn list_by_owner(&self, _owner: &str) -> Result<Vec<Transaction>> {
            Ok(Vec::new())
        }
    }

    /// Counts range fetches so cache hits are observable.
    struct CountingQuoteRepository {
        fetches: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl QuoteRepositoryTrait for CountingQuoteRepository {
        async fn upsert_batch(&self, _instrument_id: &str, _quotes: Vec<NewQuote>) -> Result<usize> {
            unimplemented!("not needed for these tests")
        }

        fn list_range(
            &self,
            instrument_id: &str,
            _from: NaiveDate,
            _to: NaiveDate,
        ) -> Result<Vec<Quote>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(vec![
                Quote {
                    instrument_id: instrument_id.to_string(),
                    date: date(2),
                    close: dec!(11),
                },
                // Invalid point that the service must filter out.
                Quote {
                    instrument_id: instrument_id.to_string(),
                    date: date(3),
                    close: Decimal::ZERO,
                },
            ])
        }

        fn latest_close(&self, _instrument_id: &str) -> Result<Option<Decimal>> {
            Ok(None)
        }
    }

    fn service() -> (HistoryService, Arc<CountingQuoteRepository>) {
        let quotes = Arc::new(CountingQuoteRepository {
            fetches: AtomicUsize::new(0),
        });
        let svc = HistoryService::new(
            Arc::new(SingleInstrumentRepository),
            Arc::new(FixedTransactionRepository),
            quotes.clone(),
        );
        (svc, quotes)
    }

    #[test]
    fn filters_non_positive_closes_before_reconstruction() {
        let (svc, _) = service();

        let points = svc.get_portfolio_history("alice", date(1), date(31)).unwrap();

        // The zero-close point on day 3 is dropped entirely.
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, date(2));
        assert_eq!(points[0].value, dec!(22));
    }

    #[test]
    fn repeated_queries_hit_the_series_cache() {
        let (svc, quotes) = service();

        svc.get_portfolio_history("alice", date(1), date(31)).unwrap();
        svc.get_portfolio_history("alice", date(1), date(31)).unwrap();
        assert_eq!(quotes.fetches.load(Ordering::SeqCst), 1);

        // A different range is a different cache key.
        svc.get_portfolio_history("alice", date(1), date(15)).unwrap();
        assert_eq!(quotes.fetches.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn invalidation_forces_a_refetch() {
        let (svc, quotes) = service();

        svc.get_portfolio_history("alice", date(1), date(31)).unwrap();
        svc.invalidate_instrument("etf-1");
        svc.get_portfolio_history("alice", date(1), date(31)).unwrap();

        assert_eq!(quotes.fetches.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn rejects_inverted_date_range() {
        let (svc, _) = service();

        let result = svc.get_portfolio_history("alice", date(31), date(1));

        assert!(result.is_err());
    }
}
