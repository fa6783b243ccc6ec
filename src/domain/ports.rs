use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn monthly_file(&self) -> &str;
    fn daily_file(&self) -> &str;
    fn public_url(&self) -> Option<&str>;
}
