pub use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
    sync::atomic::{AtomicU64, Ordering},
};

pub use tokio::time::Duration;

pub use anyhow::anyhow;
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::{Getters, Setters};
pub use log::{error, info, warn};
pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
pub use serde_json::{Value, json};
pub use thiserror::Error;
