pub mod prelude;

pub mod app_user;
pub mod gambar_kos;
pub mod kos;
pub mod profile_penyewa;
pub mod role;
pub mod sewa;
pub mod tagihan;
pub mod tipe_gambar;
pub mod transactions;
pub mod user_likes;
pub mod user_role;
