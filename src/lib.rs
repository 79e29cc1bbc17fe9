// Copyright 2025 coScene
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// One-shot Cassandra node configuration editor
//
// Runs once during container/image provisioning, before the service starts:
// - Reads three boolean environment flags (TLS, client auth, byte-ordered
//   partitioner)
// - Loads the node's YAML file into a line-preserving document model
// - Applies the flag-driven field rewrites
// - Writes the result back in place, leaving everything else byte-identical

pub mod config;
pub mod document;
pub mod flags;
pub mod transform;

// Re-export main types
pub use config::{load_config, load_config_with_env, ProvisionConfig};
pub use document::{DocumentError, YamlDocument};
pub use flags::ProvisionFlags;
pub use transform::apply;
