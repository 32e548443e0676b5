//! Outfit model -> entity mapper

use glamora_core::{Outfit, Snowflake};

use crate::models::OutfitModel;

impl From<OutfitModel> for Outfit {
    fn from(model: OutfitModel) -> Self {
        Outfit {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            name: model.name,
            items: model.items.0,
            occasion: model.occasion,
            weather: model.weather,
            notes: model.notes,
            is_favorite: model.is_favorite,
            worn_date: model.worn_date,
            created_at: model.created_at,
        }
    }
}
