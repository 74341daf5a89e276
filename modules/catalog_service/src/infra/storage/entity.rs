//! SeaORM entities for database tables
//!
//! The products -> categories association is declared here so queries can
//! join on it; migrations never turn it into a physical constraint.

use sea_orm::entity::prelude::*;

/// Products table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    pub description: String,

    /// Image reference
    pub image: String,

    /// Logical reference to categories.id
    pub category_id: i32,

    /// Added by the additive price migration
    pub price: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Logical foreign key to categories
    #[sea_orm(
        belongs_to = "category::Entity",
        from = "Column::CategoryId",
        to = "category::Column::Id"
    )]
    Category,
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Categories table module
pub mod category {
    use sea_orm::entity::prelude::*;

    /// Categories table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "categories")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        pub name: String,

        pub description: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with products
        #[sea_orm(has_many = "super::Entity")]
        Products,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Products.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
