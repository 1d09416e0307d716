use crate::collection::{CollectionEntity, Visible, MIN_QUERY_LEN};
use crate::config::Config;
use crate::error::Error;
use crate::notify::{Level, NotificationQueue};
use crate::screens::categories::{CategoriesScreen, CategoryField};
use crate::screens::orders::{OrderField, OrdersScreen};
use crate::screens::products::{ProductField, ProductsScreen};
use crate::screens::users::{UserField, UsersScreen};
use crate::Command;
use crate::RuntimeInfo;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use storefront_api::StorefrontApi;

pub async fn handle_cli_command(command: Command, rt: RuntimeInfo) -> Result<()> {
    let config = rt.config;
    let api = Arc::new(StorefrontApi::new(config.api_url.as_str())?);
    let (mut queue, notify) =
        NotificationQueue::new(Duration::from_millis(config.notification_duration_ms));
    match command {
        Command::Products {
            page,
            category,
            sort,
        } => {
            let mut screen = ProductsScreen::new(api, &config, notify);
            if category.is_some() {
                screen.set_category(category).await;
            } else {
                screen.open().await;
            }
            screen.controller.set_page(page).await;
            if let Some(sort) = sort {
                screen.controller.toggle_sort(parse_product_sort(&sort)?)?;
            }
            print_products(&screen.visible());
        }
        Command::Search { query, page } => {
            if query.trim().chars().count() < MIN_QUERY_LEN {
                return Err(Error::QueryTooShort { query }.into());
            }
            let mut screen = ProductsScreen::new(api, &config, notify);
            screen.controller.on_query_change(&query);
            screen.controller.pump_search().await;
            screen.controller.set_page(page).await;
            print_products(&screen.visible());
        }
        Command::DeleteProduct { id } => {
            let mut screen = ProductsScreen::new(api, &config, notify);
            screen.open().await;
            screen.delete_product(&id.into()).await;
        }
        Command::BulkDeleteProducts { ids } => {
            let mut screen = ProductsScreen::new(api, &config, notify);
            screen.open().await;
            for id in ids {
                screen.controller.toggle_selected(id.into());
            }
            screen.delete_selected().await;
        }
        Command::Categories { page } => {
            let mut screen = CategoriesScreen::new(api, &config, notify);
            screen.open().await;
            screen.controller.set_page(page).await;
            print_table(&[("Name", CategoryField::Name)], &screen.visible());
        }
        Command::CreateCategory { name } => {
            let mut screen = CategoriesScreen::new(api, &config, notify);
            screen.open().await;
            screen.create_category(&name).await;
        }
        Command::DeleteCategory { id } => {
            let mut screen = CategoriesScreen::new(api, &config, notify);
            screen.open().await;
            screen.delete_category(&id.into()).await;
        }
        Command::Users { page } => {
            let mut screen = UsersScreen::new(api, &config, notify);
            screen.open().await;
            screen.controller.set_page(page).await;
            print_table(
                &[("Name", UserField::Name), ("Email", UserField::Email)],
                &screen.visible(),
            );
        }
        Command::Orders { user, page } => {
            let mut screen = OrdersScreen::new(api, &config);
            match user {
                Some(user) => screen.set_user(Some(user.into())).await,
                None => screen.open().await,
            }
            screen.controller.set_page(page).await;
            print_table(
                &[
                    ("Date", OrderField::Date),
                    ("Customer", OrderField::Customer),
                    ("Total", OrderField::Total),
                ],
                &screen.visible(),
            );
        }
    }
    print_notifications(&mut queue);
    Ok(())
}

fn parse_product_sort(column: &str) -> crate::Result<ProductField> {
    match column.to_lowercase().as_str() {
        "name" => Ok(ProductField::Name),
        "price" => Ok(ProductField::Price),
        "old-price" => Ok(ProductField::OldPrice),
        other => Err(Error::not_sortable(other)),
    }
}

fn print_products(visible: &Visible<storefront_api::model::Product>) {
    print_table(
        &[
            ("Name", ProductField::Name),
            ("Price", ProductField::Price),
            ("Old price", ProductField::OldPrice),
            ("Category", ProductField::Category),
        ],
        visible,
    );
}

/// Plain text table over the rendered slice, column widths fitted to the
/// longest cell.
fn print_table<E: CollectionEntity>(columns: &[(&str, E::Field)], visible: &Visible<E>) {
    let mut widths: Vec<usize> = columns.iter().map(|(header, _)| header.len()).collect();
    let rows: Vec<Vec<String>> = visible
        .items
        .iter()
        .map(|item| {
            columns
                .iter()
                .enumerate()
                .map(|(i, (_, field))| {
                    let cell = item.field(*field).display().into_owned();
                    widths[i] = widths[i].max(cell.len());
                    cell
                })
                .collect()
        })
        .collect();
    let header = columns
        .iter()
        .enumerate()
        .map(|(i, (header, _))| format!("{header:<width$}", width = widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{header}");
    for row in rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{cell:<width$}", width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{line}");
    }
    println!(
        "Page {} of {}",
        visible.window.effective_page, visible.window.total_pages
    );
}

fn print_notifications(queue: &mut NotificationQueue) {
    queue.tick();
    for notification in queue.visible() {
        let level = match notification.level {
            Level::Success => "ok",
            Level::Error => "error",
            Level::Info => "info",
        };
        println!("[{level}] {}", notification.message);
    }
}
