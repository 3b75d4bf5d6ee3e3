mod resource {
    pub mod audit;
    pub mod user;
}

#[cfg(test)]
mod tests {
    use crate::resource::{audit::AuditEvent, user::User};
    use indoc::indoc;
    use keel::{
        Entity, Feature, GenericSqlWriter, InsertError, InsertQuery, MySqlSqlWriter,
        PostgresSqlWriter, Raw, SqlWriter, SqliteSqlWriter, Value, ValueMap, raw,
    };
    use uuid::Uuid;

    const GENERIC: GenericSqlWriter = GenericSqlWriter::new();
    const POSTGRES: PostgresSqlWriter = PostgresSqlWriter::new();
    const SQLITE: SqliteSqlWriter = SqliteSqlWriter::new();
    const MYSQL: MySqlSqlWriter = MySqlSqlWriter::new();

    fn insert_error(error: keel::Error) -> InsertError {
        error
            .downcast_ref::<InsertError>()
            .cloned()
            .unwrap_or_else(|| panic!("Expected an InsertError, got: {error:#}"))
    }

    #[test]
    fn single_entity() {
        let mut user = User::new("Alice");
        let query = user.insert();
        assert_eq!(
            query.to_sql(&GENERIC).unwrap(),
            r#"INSERT INTO "users" ("id", "name", "email") VALUES (DEFAULT, 'Alice', NULL) RETURNING "id""#
        );
        // Without DEFAULT the zero id is left out and read back
        assert_eq!(
            query.to_sql(&SQLITE).unwrap(),
            r#"INSERT INTO "users" ("name", "email") VALUES ('Alice', NULL) RETURNING "id""#
        );
        // Without RETURNING the id comes from the driver
        assert_eq!(
            query.to_sql(&MYSQL).unwrap(),
            "INSERT INTO `users` (`id`, `name`, `email`) VALUES (DEFAULT, 'Alice', NULL)"
        );
    }

    #[test]
    fn single_entity_with_id() {
        let mut user = User {
            id: 5,
            name: "O'Brien".into(),
            email: Some("ob@example.com".into()),
        };
        let query = user.insert();
        assert_eq!(
            query.to_sql(&SQLITE).unwrap(),
            r#"INSERT INTO "users" ("id", "name", "email") VALUES (5, 'O''Brien', 'ob@example.com')"#
        );
        assert_eq!(
            query.to_sql(&GENERIC).unwrap(),
            r#"INSERT INTO "users" ("id", "name", "email") VALUES (5, 'O''Brien', 'ob@example.com')"#
        );
    }

    #[test]
    fn bind_arguments() {
        let mut user = User {
            id: 0,
            name: "Alice".into(),
            email: Some("alice@example.com".into()),
        };
        let query = user.insert();
        let statement = query.build(&POSTGRES).unwrap();
        assert_eq!(
            statement.sql,
            r#"INSERT INTO "users" ("id", "name", "email") VALUES (DEFAULT, $1, $2) RETURNING "id""#
        );
        assert_eq!(
            statement.args,
            [
                Value::Varchar(Some("Alice".into())),
                Value::Varchar(Some("alice@example.com".into())),
            ]
        );

        let statement = query.build(&SQLITE).unwrap();
        assert_eq!(
            statement.sql,
            r#"INSERT INTO "users" ("name", "email") VALUES (?, ?) RETURNING "id""#
        );
        assert_eq!(statement.args.len(), 2);

        // NULL is written as a literal, never bound
        let mut user = User::new("Bob");
        let statement = user.insert().build(&POSTGRES).unwrap();
        assert_eq!(
            statement.sql,
            r#"INSERT INTO "users" ("id", "name", "email") VALUES (DEFAULT, $1, NULL) RETURNING "id""#
        );
        assert_eq!(statement.args, [Value::Varchar(Some("Bob".into()))]);
    }

    #[test]
    fn rendering_is_repeatable() {
        let mut users = vec![User::new("Alice"), User::new("Bob")];
        let query = InsertQuery::new()
            .model_entities(&mut users)
            .value("tenant", raw!("?", 3));
        let first = query.build(&POSTGRES).unwrap();
        let second = query.build(&POSTGRES).unwrap();
        assert_eq!(first, second);
        assert_eq!(query.to_sql(&GENERIC).unwrap(), query.to_sql(&GENERIC).unwrap());
    }

    #[test]
    fn entity_slice() {
        let mut users = vec![
            User::new("Alice"),
            User {
                id: 0,
                name: "Bob".into(),
                email: Some("bob@example.com".into()),
            },
        ];
        let query = InsertQuery::new().model_entities(&mut users);
        assert_eq!(
            query.to_sql(&GENERIC).unwrap(),
            indoc! {r#"
                INSERT INTO "users" ("id", "name", "email") VALUES (DEFAULT, 'Alice', NULL), (DEFAULT, 'Bob', 'bob@example.com') RETURNING "id"
            "#}
            .trim()
        );
        assert_eq!(
            query.to_sql(&SQLITE).unwrap(),
            indoc! {r#"
                INSERT INTO "users" ("name", "email") VALUES ('Alice', NULL), ('Bob', 'bob@example.com') RETURNING "id"
            "#}
            .trim()
        );
        // Template renders a single row
        assert_eq!(
            query.template(&SQLITE).unwrap(),
            r#"INSERT INTO "users" ("name", "email") VALUES (?, ?) RETURNING "id""#
        );
    }

    #[test]
    fn entity_array() {
        let mut users = [User::new("Alice"), User::new("Bob"), User::new("Carol")];
        let statement = InsertQuery::new()
            .model_entities(&mut users)
            .build(&MYSQL)
            .unwrap();
        assert_eq!(
            statement.sql,
            "INSERT INTO `users` (`id`, `name`, `email`) VALUES (DEFAULT, ?, NULL), (DEFAULT, ?, NULL), (DEFAULT, ?, NULL)"
        );
        assert_eq!(statement.args.len(), 3);
    }

    #[test]
    fn column_and_value_counts_match() {
        let mut users = vec![User::new("Alice"), User::new("Bob")];
        let query = InsertQuery::new()
            .model_entities(&mut users)
            .value("tenant", raw!("?", 3))
            .value("source", "'import'");
        for writer in [
            GENERIC.as_dyn(),
            POSTGRES.as_dyn(),
            SQLITE.as_dyn(),
            MYSQL.as_dyn(),
        ] {
            let sql = query.template(writer).unwrap();
            let (columns, values) = sql
                .split_once(" VALUES ")
                .expect("The statement must contain VALUES");
            let values = values.split(" RETURNING ").next().unwrap();
            assert_eq!(
                columns.matches(", ").count(),
                values.matches(", ").count(),
                "{sql}"
            );
        }
    }

    #[test]
    fn extra_values_every_row() {
        let mut users = vec![User::new("Alice"), User::new("Bob")];
        let query = InsertQuery::new()
            .model_entities(&mut users)
            .value("tenant", raw!("?", 3));
        assert_eq!(
            query.to_sql(&GENERIC).unwrap(),
            indoc! {r#"
                INSERT INTO "users" ("id", "name", "email", "tenant") VALUES (DEFAULT, 'Alice', NULL, 3), (DEFAULT, 'Bob', NULL, 3) RETURNING "id"
            "#}
            .trim()
        );
        let statement = query.build(&POSTGRES).unwrap();
        assert_eq!(
            statement.sql,
            indoc! {r#"
                INSERT INTO "users" ("id", "name", "email", "tenant") VALUES (DEFAULT, $1, NULL, $2), (DEFAULT, $3, NULL, $4) RETURNING "id"
            "#}
            .trim()
        );
        assert_eq!(
            statement.args,
            [
                Value::Varchar(Some("Alice".into())),
                Value::Int32(Some(3)),
                Value::Varchar(Some("Bob".into())),
                Value::Int32(Some(3)),
            ]
        );
    }

    #[test]
    fn override_model_value() {
        let mut user = User::new("alice");
        let query = user
            .insert()
            .value("name", raw!("upper(?)", "alice"))
            .value("id", "nextval('users_id_seq')");
        assert_eq!(
            query.to_sql(&SQLITE).unwrap(),
            r#"INSERT INTO "users" ("id", "name", "email") VALUES (nextval('users_id_seq'), upper('alice'), NULL) RETURNING "id", "name""#
        );
        assert_eq!(
            query.template(&GENERIC).unwrap(),
            r#"INSERT INTO "users" ("id", "name", "email") VALUES (nextval('users_id_seq'), upper(?), ?) RETURNING "id", "name""#
        );
    }

    #[test]
    fn sql_default() {
        let mut event = AuditEvent {
            id: Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap(),
            kind: "login".into(),
            data: Some(vec![0x01, 0xAB]),
            ..Default::default()
        };
        let query = event.insert();
        assert_eq!(
            query.to_sql(&SQLITE).unwrap(),
            indoc! {r#"
                INSERT INTO "audit"."audit_event" ("id", "kind", "payload", "created_at") VALUES ('67e55044-10b1-426f-9247-bb680e5fe0c8', 'login', X'01AB', CURRENT_TIMESTAMP) RETURNING "created_at"
            "#}
            .trim()
        );
        assert_eq!(
            query.to_sql(&POSTGRES).unwrap(),
            indoc! {r#"
                INSERT INTO "audit"."audit_event" ("id", "kind", "payload", "created_at") VALUES ('67e55044-10b1-426f-9247-bb680e5fe0c8', 'login', '\x01AB', CURRENT_TIMESTAMP) RETURNING "created_at"
            "#}
            .trim()
        );
    }

    #[test]
    fn explicit_columns() {
        let mut user = User {
            id: 1,
            name: "Alice".into(),
            email: None,
        };
        assert_eq!(
            user.insert().column("id").column("name").to_sql(&SQLITE).unwrap(),
            r#"INSERT INTO "users" ("id", "name") VALUES (1, 'Alice')"#
        );
        assert_eq!(
            user.insert().exclude_column("email").to_sql(&GENERIC).unwrap(),
            r#"INSERT INTO "users" ("id", "name") VALUES (1, 'Alice')"#
        );
        // Clearing the selection goes back to every column
        assert_eq!(
            user.insert().exclude_column("*").to_sql(&GENERIC).unwrap(),
            r#"INSERT INTO "users" ("id", "name", "email") VALUES (1, 'Alice', NULL)"#
        );
        let error = user
            .insert()
            .exclude_column("phone")
            .to_sql(&GENERIC)
            .unwrap_err();
        assert_eq!(
            insert_error(error),
            InsertError::UnknownColumn {
                table: "users".into(),
                column: "phone".into(),
            }
        );
        let error = user.insert().column("phone").to_sql(&GENERIC).unwrap_err();
        assert!(matches!(
            insert_error(error),
            InsertError::UnknownColumn { .. }
        ));
    }

    #[test]
    fn explicit_columns_keep_zero_values() {
        let mut user = User::new("Alice");
        // Listed columns are never skipped
        assert_eq!(
            user.insert().column("id").column("name").to_sql(&SQLITE).unwrap(),
            r#"INSERT INTO "users" ("id", "name") VALUES (NULL, 'Alice') RETURNING "id""#
        );
    }

    #[test]
    fn replace_and_ignore() {
        let mut user = User {
            id: 1,
            name: "Alice".into(),
            email: None,
        };
        assert_eq!(
            user.insert().ignore().to_sql(&MYSQL).unwrap(),
            "INSERT IGNORE INTO `users` (`id`, `name`, `email`) VALUES (1, 'Alice', NULL)"
        );
        assert_eq!(
            user.insert().replace().to_sql(&MYSQL).unwrap(),
            "REPLACE INTO `users` (`id`, `name`, `email`) VALUES (1, 'Alice', NULL)"
        );
        assert_eq!(
            user.insert().ignore().replace().to_sql(&MYSQL).unwrap(),
            "REPLACE INTO `users` (`id`, `name`, `email`) VALUES (1, 'Alice', NULL)"
        );
        assert_eq!(
            user.insert().replace().ignore().to_sql(&SQLITE).unwrap(),
            r#"REPLACE INTO "users" ("id", "name", "email") VALUES (1, 'Alice', NULL)"#
        );
        // Written even where the dialect has no such clause
        assert!(!SQLITE.has_feature(Feature::InsertIgnore));
        assert_eq!(
            user.insert().ignore().to_sql(&SQLITE).unwrap(),
            r#"INSERT IGNORE INTO "users" ("id", "name", "email") VALUES (1, 'Alice', NULL)"#
        );
    }

    #[test]
    fn on_conflict() {
        let mut user = User {
            id: 1,
            name: "Alice".into(),
            email: None,
        };
        assert_eq!(
            user.insert()
                .on("CONFLICT (id) DO UPDATE")
                .set("name = EXCLUDED.name")
                .to_sql(&GENERIC)
                .unwrap(),
            indoc! {r#"
                INSERT INTO "users" ("id", "name", "email") VALUES (1, 'Alice', NULL) ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name
            "#}
            .trim()
        );
        assert_eq!(
            user.insert()
                .on("CONFLICT (?PKs) DO NOTHING")
                .to_sql(&SQLITE)
                .unwrap(),
            r#"INSERT INTO "users" ("id", "name", "email") VALUES (1, 'Alice', NULL) ON CONFLICT ("id") DO NOTHING"#
        );
        assert_eq!(
            user.insert()
                .column("id")
                .column("name")
                .on("CONFLICT (id) DO UPDATE")
                .where_("?TableName.email IS NULL")
                .where_or(raw!("?TableName.name <> ?", "Alice"))
                .to_sql(&POSTGRES)
                .unwrap(),
            indoc! {r#"
                INSERT INTO "users" ("id", "name") VALUES (1, 'Alice') ON CONFLICT (id) DO UPDATE SET "name" = EXCLUDED."name" WHERE ("users".email IS NULL) OR ("users".name <> 'Alice')
            "#}
            .trim()
        );
    }

    #[test]
    fn on_conflict_with_alias() {
        let mut event = AuditEvent {
            id: Uuid::nil(),
            kind: "logout".into(),
            ..Default::default()
        };
        let query = event
            .insert()
            .column("id")
            .column("kind")
            .on("CONFLICT (id) DO UPDATE");
        assert_eq!(
            query.to_sql(&GENERIC).unwrap(),
            indoc! {r#"
                INSERT INTO "audit"."audit_event" AS "e" ("id", "kind") VALUES ('00000000-0000-0000-0000-000000000000', 'logout') ON CONFLICT (id) DO UPDATE SET "kind" = EXCLUDED."kind"
            "#}
            .trim()
        );
        let writer = GenericSqlWriter::with_features(
            GenericSqlWriter::FEATURES.without(Feature::InsertTableAlias),
        );
        assert!(
            query
                .to_sql(&writer)
                .unwrap()
                .starts_with(r#"INSERT INTO "audit"."audit_event" ("id", "kind")"#)
        );
    }

    #[test]
    fn on_duplicate_key() {
        let mut user = User {
            id: 1,
            name: "Alice".into(),
            email: None,
        };
        assert_eq!(
            user.insert()
                .on("DUPLICATE KEY UPDATE")
                .set("name = VALUES(name)")
                .to_sql(&MYSQL)
                .unwrap(),
            indoc! {"
                INSERT INTO `users` (`id`, `name`, `email`) VALUES (1, 'Alice', NULL) ON DUPLICATE KEY UPDATE name = VALUES(name)
            "}
            .trim()
        );
        assert_eq!(
            user.insert()
                .column("id")
                .column("name")
                .column("email")
                .on("DUPLICATE KEY UPDATE")
                .to_sql(&MYSQL)
                .unwrap(),
            indoc! {"
                INSERT INTO `users` (`id`, `name`, `email`) VALUES (1, 'Alice', NULL) ON DUPLICATE KEY UPDATE `name` = VALUES(`name`), `email` = VALUES(`email`)
            "}
            .trim()
        );
    }

    #[test]
    fn returning() {
        let mut user = User::new("Alice");
        assert_eq!(
            user.insert().returning("*").to_sql(&GENERIC).unwrap(),
            r#"INSERT INTO "users" ("id", "name", "email") VALUES (DEFAULT, 'Alice', NULL) RETURNING *"#
        );
        assert_eq!(
            user.insert()
                .returning("id")
                .returning("name")
                .to_sql(&SQLITE)
                .unwrap(),
            r#"INSERT INTO "users" ("name", "email") VALUES ('Alice', NULL) RETURNING id, name"#
        );
        assert_eq!(
            user.insert().returning("NULL").to_sql(&SQLITE).unwrap(),
            r#"INSERT INTO "users" ("name", "email") VALUES ('Alice', NULL)"#
        );
        // Not rendered by dialects without RETURNING
        assert_eq!(
            user.insert().returning("id").to_sql(&MYSQL).unwrap(),
            "INSERT INTO `users` (`id`, `name`, `email`) VALUES (DEFAULT, 'Alice', NULL)"
        );
        let rendered = user
            .insert()
            .returning("NULL")
            .render(&SQLITE, keel::WriteMode::Bind)
            .unwrap();
        assert!(!rendered.returning);
    }

    #[test]
    fn value_map() {
        let mut row = ValueMap::new();
        row.insert("name".into(), "Alice".into());
        row.insert("age".into(), 30.into());
        row.insert("nickname".into(), Value::Varchar(None));
        {
            let query = InsertQuery::new().table("people").model_map(&mut row);
            assert_eq!(
                query.to_sql(&GENERIC).unwrap(),
                r#"INSERT INTO "people" ("age", "name", "nickname") VALUES (30, 'Alice', NULL)"#
            );
            let statement = query.build(&POSTGRES).unwrap();
            assert_eq!(
                statement.sql,
                r#"INSERT INTO "people" ("age", "name", "nickname") VALUES ($1, $2, NULL)"#
            );
            assert_eq!(
                statement.args,
                [Value::Int32(Some(30)), Value::Varchar(Some("Alice".into()))]
            );
        }
        assert_eq!(
            InsertQuery::new()
                .table("crm.people")
                .model_map(&mut row)
                .returning("id")
                .to_sql(&SQLITE)
                .unwrap(),
            r#"INSERT INTO "crm"."people" ("age", "name", "nickname") VALUES (30, 'Alice', NULL) RETURNING id"#
        );
    }

    #[test]
    fn value_map_rejects_column_mutators() {
        let mut row = ValueMap::new();
        row.insert("name".into(), "Alice".into());
        let error = InsertQuery::new()
            .table("people")
            .model_map(&mut row)
            .value("age", "30")
            .to_sql(&GENERIC)
            .unwrap_err();
        assert_eq!(insert_error(error), InsertError::UnsupportedModel("map"));
    }

    #[test]
    fn map_slice_unsupported() {
        let mut rows = vec![ValueMap::new(), ValueMap::new()];
        let error = InsertQuery::new()
            .table("people")
            .model_map_slice(&mut rows)
            .to_sql(&GENERIC)
            .unwrap_err();
        assert_eq!(insert_error(error), InsertError::MapSliceUnsupported);
    }

    #[test]
    fn empty_slice() {
        let mut users: Vec<User> = Vec::new();
        let error = InsertQuery::new()
            .model_entities(&mut users)
            .to_sql(&GENERIC)
            .unwrap_err();
        assert_eq!(insert_error(error), InsertError::EmptySlice("users".into()));

        // Errors name the table by schema, not by alias
        let mut events: Vec<AuditEvent> = Vec::new();
        let error = InsertQuery::new()
            .model_entities(&mut events)
            .to_sql(&POSTGRES)
            .unwrap_err();
        assert_eq!(
            insert_error(error),
            InsertError::EmptySlice("audit.audit_event".into())
        );
    }

    #[test]
    fn slice_fields_follow_first_record() {
        let mut users = vec![
            User::new("Alice"),
            User {
                id: 9,
                name: "Bob".into(),
                email: None,
            },
        ];
        assert_eq!(
            InsertQuery::new()
                .model_entities(&mut users)
                .to_sql(&SQLITE)
                .unwrap(),
            r#"INSERT INTO "users" ("name", "email") VALUES ('Alice', NULL), ('Bob', NULL) RETURNING "id""#
        );
        users.swap(0, 1);
        assert_eq!(
            InsertQuery::new()
                .model_entities(&mut users)
                .to_sql(&SQLITE)
                .unwrap(),
            r#"INSERT INTO "users" ("id", "name", "email") VALUES (9, 'Bob', NULL), (NULL, 'Alice', NULL) RETURNING "id""#
        );
    }

    #[test]
    fn recorded_error_replayed() {
        let mut user = User::new("Alice");
        let query = InsertQuery::new().value("name", "'x'").model(&mut user);
        let first = query.to_sql(&GENERIC).unwrap_err();
        let second = query.to_sql(&GENERIC).unwrap_err();
        assert_eq!(insert_error(first), InsertError::NilModel);
        assert_eq!(insert_error(second), InsertError::NilModel);
        assert!(query.build(&POSTGRES).is_err());
        assert!(query.template(&MYSQL).is_err());
    }

    #[test]
    fn missing_model() {
        let error = InsertQuery::new().to_sql(&GENERIC).unwrap_err();
        assert_eq!(insert_error(error), InsertError::NoTable);

        let error = InsertQuery::new()
            .table("users")
            .to_sql(&GENERIC)
            .unwrap_err();
        assert_eq!(insert_error(error), InsertError::NilModel);

        // The first recorded error is kept
        let mut row = ValueMap::new();
        let error = InsertQuery::new()
            .value("name", "'x'")
            .model_map(&mut row)
            .exclude_column("name")
            .table("users")
            .to_sql(&GENERIC)
            .unwrap_err();
        assert_eq!(insert_error(error), InsertError::NilModel);
        assert_eq!(error_message(InsertError::NilModel), "keel: Model(nil)");
    }

    fn error_message(error: InsertError) -> String {
        keel::Error::from(error).to_string()
    }

    #[test]
    fn insert_select() {
        assert_eq!(
            InsertQuery::new()
                .table("archive")
                .table("users")
                .to_sql(&GENERIC)
                .unwrap(),
            r#"INSERT INTO "archive" SELECT * FROM "users""#
        );
        assert_eq!(
            InsertQuery::new()
                .table("archive")
                .table("users")
                .table("admins")
                .column("id")
                .column("name")
                .to_sql(&GENERIC)
                .unwrap(),
            r#"INSERT INTO "archive" ("id", "name") SELECT * FROM "users", "admins""#
        );
        let mut user = User::new("Alice");
        assert_eq!(
            user.insert()
                .table_expr(raw!("(SELECT * FROM ?) AS s", keel::Ident::new("staging")))
                .to_sql(&GENERIC)
                .unwrap(),
            r#"INSERT INTO "users" SELECT * FROM (SELECT * FROM "staging") AS s"#
        );
    }

    #[test]
    fn model_table_expr() {
        let mut user = User {
            id: 3,
            name: "Alice".into(),
            email: None,
        };
        assert_eq!(
            user.insert()
                .model_table_expr("users_2025")
                .to_sql(&GENERIC)
                .unwrap(),
            r#"INSERT INTO users_2025 ("id", "name", "email") VALUES (3, 'Alice', NULL)"#
        );
    }

    #[test]
    fn with_cte() {
        let query = InsertQuery::new()
            .with("recent", Raw::new("SELECT * FROM users WHERE created_at > now() - interval '1 day'"))
            .table("archive")
            .table("recent");
        assert_eq!(
            query.to_sql(&POSTGRES).unwrap(),
            indoc! {r#"
                WITH "recent" AS (SELECT * FROM users WHERE created_at > now() - interval '1 day') INSERT INTO "archive" SELECT * FROM "recent"
            "#}
            .trim()
        );
        let writer = GenericSqlWriter::with_features(GenericSqlWriter::FEATURES.without(Feature::Cte));
        assert!(query.to_sql(&writer).is_err());
    }

    #[test]
    fn with_nested_insert() {
        let mut source = User::new("Alice");
        let nested = source.insert().returning("id");
        let query = InsertQuery::new()
            .with("inserted", nested)
            .table("audit_log")
            .table("inserted");
        assert_eq!(
            query.to_sql(&SQLITE).unwrap(),
            indoc! {r#"
                WITH "inserted" AS (INSERT INTO "users" ("name", "email") VALUES ('Alice', NULL) RETURNING id) INSERT INTO "audit_log" SELECT * FROM "inserted"
            "#}
            .trim()
        );
    }

    #[test]
    fn hook_style_update() {
        let mut user = User::new("Alice");
        let mut query = user.insert();
        query.update(|q| q.value("source", "'api'"));
        assert_eq!(
            query.to_sql(&MYSQL).unwrap(),
            "INSERT INTO `users` (`id`, `name`, `email`, `source`) VALUES (DEFAULT, 'Alice', NULL, 'api')"
        );
        let query = query.apply(|q| q.ignore());
        assert!(query.to_sql(&MYSQL).unwrap().starts_with("INSERT IGNORE INTO"));
    }

    #[test]
    fn missing_argument() {
        let mut user = User::new("Alice");
        let error = user
            .insert()
            .value("name", raw!("concat(?, ?)", "a"))
            .to_sql(&GENERIC)
            .unwrap_err();
        assert!(matches!(
            insert_error(error),
            InsertError::MissingArgument(..)
        ));
    }
}
