use acct_db::{UserRepository, open_in_memory};

/// Creates an in-memory repository with the schema applied
pub async fn create_test_repository() -> UserRepository {
    let pool = open_in_memory()
        .await
        .expect("Failed to create test pool");

    let repo = UserRepository::new(pool);
    repo.initialize()
        .await
        .expect("Failed to initialize schema");

    repo
}
