//! # audiodeck
//!
//! Typed client for a content-streaming catalog API (podcasts, episodes,
//! audiobooks, audio articles).
//!
//! ## Architecture
//!
//! ```text
//! Transport → RequestClient → typed APIs → services
//! ```
//!
//! - [`api`]: request composition, the HTTP transport seam, and the typed
//!   endpoint clients
//! - [`domain`]: the content model — a closed tagged union of four content
//!   kinds plus the section/page envelope and the loose search schema
//! - [`service`]: the home-feed pagination state machine and the debounced
//!   search service

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires transport → request client → typed
/// API clients from a [`Config`](config::Config).
pub mod app;

/// Request/response pipeline.
///
/// - [`ApiRequest`](api::ApiRequest): host/path/query composition
/// - [`Transport`](api::Transport): async trait over the network call
/// - [`HttpTransport`](api::HttpTransport): reqwest-based implementation
/// - [`RequestClient`](api::RequestClient): perform + decode executor
/// - [`HomeSectionsApi`](api::home::HomeSectionsApi) /
///   [`SearchApi`](api::search::SearchApi): typed endpoints
pub mod api;

/// Command-line interface using clap.
///
/// - `home [--pages N]` - fetch and print the home feed
/// - `search <query>` - run a one-shot search
pub mod cli;

/// Configuration, read from `~/.config/audiodeck/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`ContentItem`](domain::ContentItem): closed union of the four kinds
/// - [`HomeSection`](domain::HomeSection): layout/order/content envelope
/// - [`SearchSection`](domain::SearchSection): string-typed search schema
pub mod domain;

/// Feed and search services.
///
/// - [`HomeFeed`](service::HomeFeed): paginated home feed state machine
/// - [`SearchService`](service::SearchService): debounced search with
///   stale-response discard
pub mod service;
