use crate::{
    model::organization::Job,
    server::{
        data::promotion::PromotionRepository, error::AppError,
        model::promotion::CreatePromotionParam,
    },
};
use chrono::{DateTime, Duration};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_discord_id;
mod latest_by_discord_id;
