//! Application layer: one use case per business operation.
//!
//! Use cases load aggregates through repository ports, call aggregate methods
//! (which enforce the invariants), persist the result and return plain values
//! for the API layer to serialize.
//!
//! # Ads
//!
//! - [`use_cases::CreateAdUseCase`], [`use_cases::UpdateAdUseCase`]
//! - [`use_cases::PublishAdUseCase`], [`use_cases::MarkAdAsSoldUseCase`]
//! - [`use_cases::GetAdUseCase`], [`use_cases::GetAdsUseCase`]
//! - [`use_cases::SearchAdsUseCase`]
//!
//! # Messaging
//!
//! - [`use_cases::SendMessageUseCase`]
//! - [`use_cases::GetConversationsUseCase`], [`use_cases::GetConversationMessagesUseCase`]
//!
//! # Accounts
//!
//! - [`use_cases::RegisterUserUseCase`], [`use_cases::LoginUseCase`]
//! - [`use_cases::AuthenticateUseCase`]

pub mod use_cases;
