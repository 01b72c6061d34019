//! ABI binding generator library.
//!
//! This crate generates typed client bindings from contract ABI descriptions
//! parsed by `abi-define`. The only output format today is TypeScript, which
//! produces an injectable class with:
//!
//! - A constructor taking the `BlockchainService` plus the ABI constructor inputs
//! - One method per ABI function, returning an `Observable`
//! - One `on<Event>` subscription per ABI event
//! - The raw ABI and the contract address as fields
//!
//! ## Modules
//!
//! - [`codegen`] - The [`Generator`](codegen::Generator) trait and per-format generators
//! - [`emitter`] - Indentation-aware text accumulator
//! - [`type_map`] - Domain type to target type tables
//! - [`naming`] - Binding name transforms
//! - [`registry`] - Output format registry
//! - [`output`] - Generation entry point and file writing
//! - [`validation`] - Checks run by the CLI before generating
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use abi_define::Description;
//! use abi_gen::output::generate;
//! use abi_gen::registry::FormatRegistry;
//!
//! let registry = FormatRegistry::new();
//! let abi = r#"[{"type":"function","name":"Balance","inputs":[{"name":"who","type":"address"}],"outputs":[{"type":"uint256"}]}]"#;
//! let description = Description::from_json_str("Token", "0x1234", abi).unwrap();
//!
//! let file = generate(&description, &registry, "ts").unwrap();
//! assert!(file.text.contains("balance (who: string) : Observable< number >"));
//! ```
//!
//! ## Generated Code Structure
//!
//! ```text
//! import { IContract } from './abstract/icontract';
//! import { BlockchainService } from '../services/blockchain';
//! import { Observable } from 'rxjs/Observable';
//!
//! @Injectable()
//! export class Token implements IContract {
//!     IBArray = [...];
//!     Address = 0x1234;
//!
//!     constructor (private blockchainService: BlockchainService) {
//!     }
//!
//!     balance (who: string) : Observable< number > { ... }
//! }
//! ```

pub mod codegen;
pub mod emitter;
pub mod errors;
pub mod naming;
pub mod output;
pub mod registry;
pub mod type_map;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;
