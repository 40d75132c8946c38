pub mod board;
pub mod state;

pub use board::{
    classify, group_orders, move_request, BoardColumn, BoardKind, BoardQuery, MoveOrderRequest,
};
pub use state::{date_bucket, OrderState};

use crate::usecases::common::UseCaseMetadata;

pub struct OrderBoardUseCase;

impl UseCaseMetadata for OrderBoardUseCase {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "order_board"
    }

    fn display_name() -> &'static str {
        "Tablero de pedidos"
    }

    fn description() -> &'static str {
        "Columnas por fecha de entrega y etapa de preparación"
    }
}
