pub mod backend;
pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use backend::{BackendOperation, FakeBackend};
pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_STORAGE_PREFIX, TEST_TODAY},
        fixtures::factory, BackendOperation, FakeBackend, TestBuilder, TestContext, TestError,
    };
}
