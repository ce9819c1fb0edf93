pub use sea_orm_migration::prelude::*;

mod m20251201_000001_app_user;
mod m20251201_000002_role;
mod m20251201_000003_user_role;
mod m20251201_000004_kos;
mod m20251201_000005_tipe_gambar;
mod m20251201_000006_gambar_kos;
mod m20251201_000007_user_likes;
mod m20251201_000008_sewa;
mod m20251201_000009_tagihan;
mod m20251201_000010_transactions;
mod m20251201_000011_profile_penyewa;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251201_000001_app_user::Migration),
            Box::new(m20251201_000002_role::Migration),
            Box::new(m20251201_000003_user_role::Migration),
            Box::new(m20251201_000004_kos::Migration),
            Box::new(m20251201_000005_tipe_gambar::Migration),
            Box::new(m20251201_000006_gambar_kos::Migration),
            Box::new(m20251201_000007_user_likes::Migration),
            Box::new(m20251201_000008_sewa::Migration),
            Box::new(m20251201_000009_tagihan::Migration),
            Box::new(m20251201_000010_transactions::Migration),
            Box::new(m20251201_000011_profile_penyewa::Migration),
        ]
    }
}
