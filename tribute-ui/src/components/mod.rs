// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod community;
pub mod features;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod impact;

pub use community::Community;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use impact::Impact;
