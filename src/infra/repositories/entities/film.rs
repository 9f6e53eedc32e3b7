//! Film database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Film;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "films")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub published_at: DateTimeUtc,
    pub genre_id: Uuid,
    pub released: i32,
    pub rating: f64,
    pub preview_video_link: String,
    pub video_link: String,
    pub starring: Vec<String>,
    pub director: String,
    pub run_time: i32,
    pub comment_count: i32,
    pub user_id: Uuid,
    pub poster_image: String,
    pub background_image: String,
    pub background_color: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::genre::Entity",
        from = "Column::GenreId",
        to = "super::genre::Column::Id"
    )]
    Genre,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Genre.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Film {
    fn from(model: Model) -> Self {
        Film {
            id: model.id,
            title: model.title,
            description: model.description,
            published_at: model.published_at,
            genre_id: model.genre_id,
            released: model.released,
            rating: model.rating,
            preview_video_link: model.preview_video_link,
            video_link: model.video_link,
            starring: model.starring,
            director: model.director,
            run_time: model.run_time,
            comment_count: model.comment_count,
            user_id: model.user_id,
            poster_image: model.poster_image,
            background_image: model.background_image,
            background_color: model.background_color,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
