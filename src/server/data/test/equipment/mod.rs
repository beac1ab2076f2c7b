use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::equipment::EquipmentFactory};

use crate::{
    model::equipment::{EquipmentCategory, EquipmentCondition},
    server::{
        data::equipment::EquipmentRepository,
        model::equipment::{EquipmentFilter, EquipmentParams},
    },
};

mod create;
mod get_paginated;
mod transfer;
