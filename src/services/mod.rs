// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Data-access services built on the intercepted API client

mod app_clients;

pub use app_clients::{
    AccessTokenDto, AppClientDto, AppClientsService, CreateAppClientDto, UpdateAppClientDto,
};
