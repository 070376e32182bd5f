//! Purchase section view: variant cards, the order form and the success
//! panel. All interactions come back as [`OrderMessage`].

use iced::widget::{button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::state::order::{format_eur, OrderField, OrderMessage, OrderState};

use super::theme;

/// Stable input ids, used to walk focus through the form with Enter
pub fn input_id(field: OrderField) -> text_input::Id {
    text_input::Id::new(match field {
        OrderField::Name => "order-name",
        OrderField::Email => "order-email",
        OrderField::Phone => "order-phone",
        OrderField::Address => "order-address",
    })
}

pub fn section(order: &OrderState) -> Element<'_, OrderMessage> {
    let variants = row(order
        .variants()
        .iter()
        .enumerate()
        .map(|(index, variant)| {
            button(
                column![
                    text(format!("{} g", variant.weight_grams)).size(22),
                    text(format_eur(variant.price_eur))
                        .size(16)
                        .color(theme::GOLD),
                ]
                .spacing(4)
                .align_x(Alignment::Center),
            )
            .style(theme::variant_card(order.is_selected(index)))
            .padding(theme::pad(14.0, 26.0))
            .on_press(OrderMessage::VariantPressed(index))
            .into()
        }))
    .spacing(16);

    let selection = order.selection();
    let selection_line = text(format!(
        "Selected: {} g of pure saffron, {}",
        selection.weight_grams,
        format_eur(selection.price_eur)
    ))
    .size(14)
    .color(theme::TEXT_SECONDARY);

    let body: Element<'_, OrderMessage> = if order.submitted() {
        success_panel(order)
    } else {
        form(order)
    };

    column![variants, selection_line, body]
        .spacing(20)
        .into()
}

fn form(order: &OrderState) -> Element<'_, OrderMessage> {
    let mut fields = column![].spacing(12);

    if let Some(error) = order.error() {
        fields = fields.push(
            container(text(error.message()).size(14))
                .style(theme::error_banner)
                .width(Length::Fill)
                .padding(12),
        );
    }

    let quantity = pick_list(
        order.variants().to_vec(),
        order.form.quantity,
        OrderMessage::QuantityPicked,
    )
    .placeholder("Select a quantity")
    .style(theme::quantity_picker)
    .width(Length::Fill)
    .padding(12);

    let name = text_input("Full name", &order.form.name)
        .id(input_id(OrderField::Name))
        .on_input(OrderMessage::NameChanged)
        .on_submit(OrderMessage::FieldSubmitted(OrderField::Name))
        .style(theme::form_input)
        .padding(12);

    let email = text_input("Email address", &order.form.email)
        .id(input_id(OrderField::Email))
        .on_input(OrderMessage::EmailChanged)
        .on_submit(OrderMessage::FieldSubmitted(OrderField::Email))
        .style(theme::form_input)
        .padding(12);

    let phone = text_input("Phone number", &order.form.phone)
        .id(input_id(OrderField::Phone))
        .on_input(OrderMessage::PhoneChanged)
        .on_submit(OrderMessage::FieldSubmitted(OrderField::Phone))
        .style(theme::form_input)
        .padding(12);

    let address = text_input("Delivery address", &order.form.address)
        .id(input_id(OrderField::Address))
        .on_input(OrderMessage::AddressChanged)
        .on_submit(OrderMessage::FieldSubmitted(OrderField::Address))
        .style(theme::form_input)
        .padding(12);

    let submit_row = row![
        text(format!("Total: {}", format_eur(order.selection().price_eur)))
            .size(16)
            .color(theme::GOLD),
        iced::widget::horizontal_space(),
        button(text("Place order").size(16))
            .style(theme::primary_button)
            .padding(theme::pad(12.0, 28.0))
            .on_press(OrderMessage::SubmitPressed),
    ]
    .align_y(Alignment::Center);

    fields = fields
        .push(quantity)
        .push(name)
        .push(email)
        .push(phone)
        .push(address)
        .push(submit_row);

    container(fields)
        .style(theme::surface_card)
        .padding(24)
        .width(Length::Fill)
        .into()
}

fn success_panel(order: &OrderState) -> Element<'_, OrderMessage> {
    let latest = order
        .log()
        .last()
        .map(|record| {
            format!(
                "{} g on its way to {}. A confirmation was sent to {}.",
                record.variant.weight_grams, record.name, record.email
            )
        })
        .unwrap_or_default();

    container(
        column![
            text("✓ Order received").size(24).color(theme::SUCCESS),
            text(latest).size(14).color(theme::TEXT_SECONDARY),
            text("This is a demonstration; no payment was taken.")
                .size(12)
                .color(theme::TEXT_MUTED),
            button(text("Place another order").size(14))
                .style(theme::ghost_button)
                .padding(theme::pad(10.0, 22.0))
                .on_press(OrderMessage::ResetPressed),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .style(theme::success_panel)
    .padding(32)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}
