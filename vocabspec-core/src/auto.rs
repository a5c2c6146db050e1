// Copyright 2025 Sushanth (https://github.com/sushanthpy)
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

//! Auto-registration of unmatched properties.

use crate::record::PropertyRecord;
use std::fmt;
use std::sync::Arc;

/// Callback invoked with each record created by auto-registration.
pub type AutoRegisterHandler = Arc<dyn Fn(&PropertyRecord) + Send + Sync>;

/// What a vocabulary does when conversion into it finds no matching
/// property.
#[derive(Clone, Default)]
pub enum AutoRegister {
    /// Drop the unmatched property.
    #[default]
    Disabled,
    /// Register the incoming property, renaming on name conflicts.
    Silent,
    /// Register like [`AutoRegister::Silent`], then call the handler with
    /// the new record.
    Notify(AutoRegisterHandler),
}

impl AutoRegister {
    /// Auto-register and notify `handler` about each new record.
    pub fn notify<F>(handler: F) -> Self
    where
        F: Fn(&PropertyRecord) + Send + Sync + 'static,
    {
        AutoRegister::Notify(Arc::new(handler))
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, AutoRegister::Disabled)
    }

    pub(crate) fn handler(&self) -> Option<&AutoRegisterHandler> {
        match self {
            AutoRegister::Notify(handler) => Some(handler),
            _ => None,
        }
    }
}

impl From<bool> for AutoRegister {
    fn from(enabled: bool) -> Self {
        if enabled {
            AutoRegister::Silent
        } else {
            AutoRegister::Disabled
        }
    }
}

impl fmt::Debug for AutoRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutoRegister::Disabled => f.write_str("Disabled"),
            AutoRegister::Silent => f.write_str("Silent"),
            AutoRegister::Notify(_) => f.write_str("Notify(<handler>)"),
        }
    }
}
