mod inmemory;
mod mongo;

use super::shared::repo::DeleteResult;
pub use inmemory::InMemoryOtpRepo;
use medtrack_domain::{Otp, ID};
pub use mongo::MongoOtpRepo;

#[async_trait::async_trait]
pub trait IOtpRepo: Send + Sync {
    async fn insert(&self, otp: &Otp) -> anyhow::Result<()>;
    async fn find_by_owner(&self, owner_id: &ID) -> Option<Otp>;
    async fn delete(&self, otp_id: &ID) -> Option<Otp>;
    async fn delete_by_owner(&self, owner_id: &ID) -> anyhow::Result<DeleteResult>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, MedtrackContext};
    use medtrack_domain::{Entity, Otp, ID};

    async fn create_contexts() -> Vec<MedtrackContext> {
        vec![
            MedtrackContext::create_inmemory(),
            setup_context().await.unwrap(),
        ]
    }

    #[tokio::test]
    async fn crud() {
        for ctx in create_contexts().await {
            let owner_id = ID::new();
            let otp = Otp::generate(owner_id.clone(), 0);
            assert!(ctx.repos.otps.insert(&otp).await.is_ok());

            let res = ctx.repos.otps.find_by_owner(&owner_id).await.unwrap();
            assert!(res.eq(&otp));
            assert_eq!(res.code, otp.code);

            let deleted = ctx.repos.otps.delete(&otp.id).await.unwrap();
            assert!(deleted.eq(&otp));
            assert!(ctx.repos.otps.find_by_owner(&owner_id).await.is_none());
        }
    }

    #[tokio::test]
    async fn delete_by_owner() {
        for ctx in create_contexts().await {
            let owner_id = ID::new();
            let other_otp = Otp::generate(ID::new(), 0);
            ctx.repos.otps.insert(&Otp::generate(owner_id.clone(), 0)).await.unwrap();
            ctx.repos.otps.insert(&other_otp).await.unwrap();

            let res = ctx.repos.otps.delete_by_owner(&owner_id).await.unwrap();
            assert_eq!(res.deleted_count, 1);
            assert!(ctx.repos.otps.find_by_owner(&owner_id).await.is_none());
            assert!(ctx
                .repos
                .otps
                .find_by_owner(&other_otp.owner_id)
                .await
                .is_some());
        }
    }
}
