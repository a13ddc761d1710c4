//! Cross-module frame tests for the ECS passes

mod frame_order;
mod lifespan_passes;
