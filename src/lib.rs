// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright © 2023 Adrian <adrian.eddy at gmail>

mod types;
mod util;
mod transform;
mod scale;
mod surface;
mod view;
mod event_queue;
pub use types::*;
pub use transform::*;
pub use scale::*;
pub use surface::*;
pub use view::*;
pub use event_queue::*;
