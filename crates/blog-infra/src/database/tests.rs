#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::sqlite_repo::SqlitePostRepository;
    use blog_core::domain::Post;
    use blog_core::ports::PostRepository;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn test_find_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([vec![post::Model {
                id: 7,
                title: "Test Post".to_owned(),
                content: "Content".to_owned(),
                created_at: Some("2024-05-01T12:00:00.000Z".to_owned()),
                updated_at: Some("2024-05-02T08:30:00.000Z".to_owned()),
            }]])
            .into_connection();

        let repo = SqlitePostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(7).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, 7);
        assert_eq!(post.created_at.as_deref(), Some("2024-05-01T12:00:00.000Z"));
        assert_eq!(post.updated_at.as_deref(), Some("2024-05-02T08:30:00.000Z"));
    }

    #[tokio::test]
    async fn test_delete_reports_unmatched_row() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = SqlitePostRepository::new(db);

        assert!(!repo.delete(42).await.unwrap());
    }
}
