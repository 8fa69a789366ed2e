use crate::{
    model::organization::Job,
    server::{
        data::member::MemberRepository, error::AppError, model::member::CreateMemberParam,
    },
};
use chrono::{DateTime, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create_if_missing;
mod delete_by_discord_id;
mod find_by_discord_id;
mod update_job;
