/// Mock implementations for testing
mod mock_branch_repository;

pub use mock_branch_repository::MockBranchRepository;
