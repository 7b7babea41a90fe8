use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub trainer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<chrono::NaiveDate>,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    pub profile_picture_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub health_notes: Option<String>,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::trainer::Entity",
        from = "Column::TrainerId",
        to = "super::trainer::Column::Id",
        on_delete = "Cascade"
    )]
    Trainer,
}

impl Related<super::trainer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trainer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
