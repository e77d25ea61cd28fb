//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Methods that validate
//! their input return [`DbResult`](crate::error::DbResult); plain reads and
//! deletes return `sqlx::Error`.

pub mod album_repo;
pub mod artist_repo;
pub mod cart_product_repo;
pub mod cart_repo;
pub mod customer_repo;
pub mod genre_repo;
pub mod media_type_repo;
pub mod member_repo;
pub mod product_repo;

pub use album_repo::AlbumRepo;
pub use artist_repo::ArtistRepo;
pub use cart_product_repo::CartProductRepo;
pub use cart_repo::CartRepo;
pub use customer_repo::CustomerRepo;
pub use genre_repo::GenreRepo;
pub use media_type_repo::MediaTypeRepo;
pub use member_repo::MemberRepo;
pub use product_repo::{PricedProduct, ProductRepo};
