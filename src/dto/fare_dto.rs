use rust_decimal::Decimal;
use serde::Serialize;
use validator::Validate;

use crate::models::fare::GENERAL_FARE_ROUTE_ID;
use crate::utils::validation::validate_positive_amount;

// Request para crear la tarifa general
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFarePayload {
    pub route_id: String,

    #[validate(custom = "validate_positive_amount")]
    pub fare: Decimal,
}

impl CreateFarePayload {
    pub fn general(fare: Decimal) -> Self {
        Self {
            route_id: GENERAL_FARE_ROUTE_ID.to_string(),
            fare,
        }
    }
}

// Request para actualizar una tarifa
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct UpdateFarePayload {
    #[validate(custom = "validate_positive_amount")]
    pub fare: Decimal,
}
