use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "boards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub board_id: i64,
    pub game_id: i64,
    pub user_id: i64,
    pub grid_size: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::games::Entity",
        from = "Column::GameId",
        to = "super::games::Column::GameId",
        on_delete = "Cascade"
    )]
    Game,
    #[sea_orm(has_many = "super::board_squares::Entity")]
    Squares,
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::board_squares::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Squares.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
