pub use super::app_user::Entity as AppUser;
pub use super::gambar_kos::Entity as GambarKos;
pub use super::kos::Entity as Kos;
pub use super::profile_penyewa::Entity as ProfilePenyewa;
pub use super::role::Entity as Role;
pub use super::sewa::Entity as Sewa;
pub use super::tagihan::Entity as Tagihan;
pub use super::tipe_gambar::Entity as TipeGambar;
pub use super::transactions::Entity as Transactions;
pub use super::user_likes::Entity as UserLikes;
pub use super::user_role::Entity as UserRole;
