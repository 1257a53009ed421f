//! SQL output snapshot tests using insta
//!
//! These tests verify that full ALTER TABLE statements stay stable.
//!
//! To update snapshots after intentional changes:
//! ```bash
//! cargo insta review
//! ```

use altersql::catalog::{Column, ForeignKey, ReferentialAction};
use altersql::operations::{TableCommand, TableCommands};
use altersql::{Safety, render_alter_table};
use insta::assert_snapshot;

#[test]
fn test_snapshot_add_columns_and_keys() {
    let commands = TableCommands::new()
        .with(TableCommand::add_column_first(
            "id",
            Column::new("BIGINT UNSIGNED").not_null().auto_increment(),
        ))
        .with(TableCommand::add_column_after(
            "status",
            Column::new("VARCHAR(16)")
                .not_null()
                .default_value("'active'")
                .comment("lifecycle state"),
            "email",
        ))
        .with(TableCommand::add_primary_key("id"))
        .with(TableCommand::add_unique_index("uq_email", ["email"]));

    let rendered = render_alter_table("users", &commands).unwrap();
    assert_eq!(rendered.safety, Safety::Safe);
    assert_snapshot!(rendered.sql, @"ALTER TABLE `users` ADD COLUMN `id` BIGINT UNSIGNED NOT NULL AUTO_INCREMENT FIRST, ADD COLUMN `status` VARCHAR(16) NOT NULL DEFAULT 'active' COMMENT 'lifecycle state' AFTER email, ADD PRIMARY KEY (`id`), ADD UNIQUE KEY `uq_email` (`email`);");
}

#[test]
fn test_snapshot_foreign_key_swap() {
    let commands = TableCommands::new()
        .with(TableCommand::drop_foreign_key("fk_posts_user"))
        .with(TableCommand::add_foreign_key(
            ForeignKey::new(["author_id"], "users", ["id"])
                .named("fk_posts_author")
                .on_delete(ReferentialAction::Cascade)
                .on_update(ReferentialAction::Restrict),
        ));

    let rendered = render_alter_table("posts", &commands).unwrap();
    assert_eq!(rendered.safety, Safety::Destructive);
    assert_snapshot!(rendered.sql, @"ALTER TABLE `posts` DROP FOREIGN KEY `fk_posts_user`, ADD CONSTRAINT `fk_posts_author` FOREIGN KEY (`author_id`) REFERENCES `users` (`id`) ON DELETE CASCADE ON UPDATE RESTRICT;");
}

#[test]
fn test_snapshot_column_rework() {
    let commands = TableCommands::new()
        .with(TableCommand::rename_column("nm", "name"))
        .with(TableCommand::change_column(
            "mail",
            "email",
            Column::new("VARCHAR(255)").not_null(),
        ))
        .with(TableCommand::modify_column("bio", Column::new("TEXT")))
        .with(TableCommand::drop_column(""))
        .with(TableCommand::rename_index("idx_nm", "idx_name"));

    assert_snapshot!(commands.render(), @"RENAME COLUMN `nm` TO `name`, CHANGE `mail` `email` VARCHAR(255) NOT NULL, MODIFY `bio` TEXT, RENAME KEY `idx_nm` TO `idx_name`");
}
