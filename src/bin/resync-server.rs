#![allow(clippy::result_large_err)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use resync::model::{
    CommentCountRecord, DeletedBoard, LikeCountRecord, ReadCountRecord, WithdrawnMember,
};

#[path = "resync_server/types.rs"]
mod types;
use self::types::*;
#[path = "resync_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "resync_server/seed.rs"]
mod seed;
use self::seed::*;
#[path = "resync_server/handlers_admin.rs"]
mod handlers_admin;
use self::handlers_admin::*;
#[path = "resync_server/routes.rs"]
mod routes;
use self::routes::*;
#[path = "resync_server/runtime.rs"]
mod runtime;

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
