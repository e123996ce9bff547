// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod invocation;
mod registry;

pub use invocation::InvocationError;
pub use registry::RegistryError;
