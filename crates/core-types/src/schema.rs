use crate::error::CoreError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The columns every input file must carry. Extra columns are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Column {
    Date,
    SkuId,
    Store,
    UnitsSold,
    Footfall,
    Inventory,
    Price,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Date,
        Column::SkuId,
        Column::Store,
        Column::UnitsSold,
        Column::Footfall,
        Column::Inventory,
        Column::Price,
    ];

    /// The header name as it appears in the input file.
    pub fn name(&self) -> &'static str {
        match self {
            Column::Date => "Date",
            Column::SkuId => "SKU_ID",
            Column::Store => "Store",
            Column::UnitsSold => "Units_Sold",
            Column::Footfall => "Footfall",
            Column::Inventory => "Inventory",
            Column::Price => "Price",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Column {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| CoreError::UnknownColumn(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for column in Column::ALL {
            assert_eq!(column.name().parse::<Column>().unwrap(), column);
        }
    }

    #[test]
    fn unknown_header_is_rejected() {
        assert!("units_sold".parse::<Column>().is_err());
    }
}
