pub mod quote;

pub use quote::{item_cost, proposed_price, EventQuote, QuoteAction, QuoteTotals};

use crate::usecases::common::UseCaseMetadata;

pub struct EventQuoteUseCase;

impl UseCaseMetadata for EventQuoteUseCase {
    fn usecase_index() -> &'static str {
        "u503"
    }

    fn usecase_name() -> &'static str {
        "event_quote"
    }

    fn display_name() -> &'static str {
        "Cotización de eventos"
    }
}
