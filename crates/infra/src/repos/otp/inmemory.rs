use super::IOtpRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use medtrack_domain::{Otp, ID};

pub struct InMemoryOtpRepo {
    otps: std::sync::Mutex<Vec<Otp>>,
}

impl InMemoryOtpRepo {
    pub fn new() -> Self {
        Self {
            otps: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IOtpRepo for InMemoryOtpRepo {
    async fn insert(&self, otp: &Otp) -> anyhow::Result<()> {
        insert(otp, &self.otps);
        Ok(())
    }

    async fn find_by_owner(&self, owner_id: &ID) -> Option<Otp> {
        find_by(&self.otps, |otp| &otp.owner_id == owner_id)
            .into_iter()
            .next()
    }

    async fn delete(&self, otp_id: &ID) -> Option<Otp> {
        delete(otp_id, &self.otps)
    }

    async fn delete_by_owner(&self, owner_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.otps, |otp| &otp.owner_id == owner_id))
    }
}
