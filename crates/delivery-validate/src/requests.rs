//! Request payloads accepted by the delivery API, with their field rules.
//!
//! Field names on the wire are the API's Portuguese names (`nome`,
//! `taxaEntrega`, ...); errors are keyed by the same names. A missing or
//! blank required field reports only the presence error; the remaining
//! rules of that field run only when the value is there.

use crate::error::ValidationErrors;
use crate::rules::{
    CategoryRule, CepRule, DeliveryTimeRule, EmailRule, LengthRule, PhoneRule,
    PriceRule, RangeRule, RegexRule, RequiredRule, StateRule,
};
use crate::traits::Validate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Presence check for a text field. Returns the value when it is present
/// and not blank.
fn required_text<'a>(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&'a str>,
    message: &str,
) -> Option<&'a str> {
    errors
        .check(field, &RequiredRule::with_message(message), value)
        .then_some(value)
        .flatten()
}

/// Presence check for any other field.
fn required<'a, T: Debug + Send + Sync>(
    errors: &mut ValidationErrors,
    field: &str,
    value: &'a Option<T>,
    message: &str,
) -> Option<&'a T> {
    errors
        .check(field, &RequiredRule::with_message(message), Some(value))
        .then_some(value.as_ref())
        .flatten()
}

/// Required text field with a maximum length.
fn required_bounded<'a>(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&'a str>,
    required_message: &str,
    max: usize,
    too_long_message: &str,
) -> Option<&'a str> {
    let value = required_text(errors, field, value, required_message)?;
    errors
        .check(
            field,
            &LengthRule::max(max).with_message(too_long_message),
            Some(value),
        )
        .then_some(value)
}

fn finish(request: &'static str, errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if !errors.is_empty() {
        tracing::debug!(
            request,
            fields = ?errors.field_names(),
            "request failed validation"
        );
    }
    errors.into_result()
}

/// Postal address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AddressRequest {
    #[serde(rename = "rua")]
    pub street: Option<String>,
    #[serde(rename = "numero")]
    pub number: Option<String>,
    #[serde(rename = "bairro")]
    pub district: Option<String>,
    #[serde(rename = "cidade")]
    pub city: Option<String>,
    #[serde(rename = "estado")]
    pub state: Option<String>,
    pub cep: Option<String>,
    #[serde(rename = "complemento", skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
}

impl Validate for AddressRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        required_bounded(
            &mut errors,
            "rua",
            self.street.as_deref(),
            "Rua é obrigatória",
            100,
            "Rua não pode ter mais de 100 caracteres",
        );
        required_bounded(
            &mut errors,
            "numero",
            self.number.as_deref(),
            "Número é obrigatório",
            10,
            "Número não pode ter mais de 10 caracteres",
        );
        required_bounded(
            &mut errors,
            "bairro",
            self.district.as_deref(),
            "Bairro é obrigatório",
            50,
            "Bairro não pode ter mais de 50 caracteres",
        );
        required_bounded(
            &mut errors,
            "cidade",
            self.city.as_deref(),
            "Cidade é obrigatória",
            50,
            "Cidade não pode ter mais de 50 caracteres",
        );

        if let Some(state) =
            required_text(&mut errors, "estado", self.state.as_deref(), "Estado é obrigatório")
        {
            errors.check("estado", &StateRule::new(), Some(state));
        }

        if let Some(cep) =
            required_text(&mut errors, "cep", self.cep.as_deref(), "CEP é obrigatório")
        {
            errors.check("cep", &CepRule::new(), Some(cep));
        }

        errors.check(
            "complemento",
            &LengthRule::max(100).with_message("Complemento não pode ter mais de 100 caracteres"),
            self.complement.as_deref(),
        );

        finish("address", errors)
    }
}

/// Restaurant registration or update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RestaurantRequest {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
    #[serde(rename = "endereco")]
    pub address: Option<String>,
    #[serde(rename = "taxaEntrega")]
    pub delivery_fee: Option<Decimal>,
    #[serde(rename = "tempoEntregaMinutos")]
    pub delivery_time_minutes: Option<i32>,
    #[serde(rename = "telefone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "avaliacao", skip_serializing_if = "Option::is_none")]
    pub rating: Option<Decimal>,
}

impl Validate for RestaurantRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        required_bounded(
            &mut errors,
            "nome",
            self.name.as_deref(),
            "Nome é obrigatório",
            100,
            "Nome não pode ter mais de 100 caracteres",
        );

        if let Some(category) = required_bounded(
            &mut errors,
            "categoria",
            self.category.as_deref(),
            "Categoria é obrigatória",
            50,
            "Categoria não pode ter mais de 50 caracteres",
        ) {
            errors.check("categoria", &CategoryRule::restaurant(), Some(category));
        }

        required_bounded(
            &mut errors,
            "endereco",
            self.address.as_deref(),
            "Endereço é obrigatório",
            255,
            "Endereço não pode ter mais de 255 caracteres",
        );

        if let Some(fee) = required(
            &mut errors,
            "taxaEntrega",
            &self.delivery_fee,
            "Taxa de entrega é obrigatória",
        ) {
            errors.check(
                "taxaEntrega",
                &RangeRule::min(Decimal::ZERO).with_message("Taxa de entrega deve ser positiva"),
                Some(fee),
            );
        }

        if let Some(minutes) = required(
            &mut errors,
            "tempoEntregaMinutos",
            &self.delivery_time_minutes,
            "Tempo de entrega é obrigatório",
        ) {
            let in_range = errors.check(
                "tempoEntregaMinutos",
                &RangeRule::min(10).with_message("Tempo de entrega deve ser pelo menos 10 minutos"),
                Some(minutes),
            ) && errors.check(
                "tempoEntregaMinutos",
                &RangeRule::max(120).with_message("Tempo de entrega não pode exceder 120 minutos"),
                Some(minutes),
            );
            if in_range {
                errors.check(
                    "tempoEntregaMinutos",
                    &DeliveryTimeRule::default(),
                    Some(minutes),
                );
            }
        }

        errors.check("telefone", &PhoneRule::new(), self.phone.as_deref());

        if let Some(email) = self.email.as_deref() {
            errors.check(
                "email",
                &EmailRule::new().with_message("Email deve ter formato válido"),
                Some(email),
            );
            errors.check(
                "email",
                &LengthRule::max(100).with_message("Email não pode ter mais de 100 caracteres"),
                Some(email),
            );
        }

        errors.check(
            "avaliacao",
            &RangeRule::min(Decimal::ZERO).with_message("Avaliação deve ser positiva"),
            self.rating.as_ref(),
        );
        errors.check(
            "avaliacao",
            &RangeRule::max(Decimal::new(50, 1)).with_message("Avaliação máxima é 5.0"),
            self.rating.as_ref(),
        );

        finish("restaurant", errors)
    }
}

fn default_available() -> bool {
    true
}

/// Menu item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRequest {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "preco")]
    pub price: Option<Decimal>,
    #[serde(rename = "restauranteId")]
    pub restaurant_id: Option<i64>,
    #[serde(rename = "disponivel", default = "default_available")]
    pub available: bool,
    #[serde(rename = "quantidadeEstoque")]
    pub stock: Option<i32>,
}

impl Default for ProductRequest {
    fn default() -> Self {
        Self {
            name: None,
            category: None,
            description: None,
            price: None,
            restaurant_id: None,
            available: default_available(),
            stock: None,
        }
    }
}

impl Validate for ProductRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(name) =
            required_text(&mut errors, "nome", self.name.as_deref(), "Nome é obrigatório")
        {
            errors.check(
                "nome",
                &LengthRule::new(2, 100).with_message("Nome deve ter entre 2 e 100 caracteres"),
                Some(name),
            );
        }

        if let Some(category) = required_bounded(
            &mut errors,
            "categoria",
            self.category.as_deref(),
            "Categoria é obrigatória",
            50,
            "Categoria não pode ter mais de 50 caracteres",
        ) {
            errors.check("categoria", &CategoryRule::product(), Some(category));
        }

        errors.check(
            "descricao",
            &LengthRule::new(10, 500).with_message("Descrição deve ter pelo menos 10 caracteres"),
            self.description.as_deref(),
        );

        if let Some(price) = required(&mut errors, "preco", &self.price, "Preço é obrigatório") {
            let in_range = errors.check(
                "preco",
                &RangeRule::min(Decimal::new(1, 2)).with_message("Preço deve ser maior que zero"),
                Some(price),
            ) && errors.check(
                "preco",
                &RangeRule::max(Decimal::new(50000, 2)).with_message("Preço máximo é R$500,00"),
                Some(price),
            );
            if in_range {
                errors.check("preco", &PriceRule::new(1, 50_000), Some(price));
            }
        }

        if let Some(id) = required(
            &mut errors,
            "restauranteId",
            &self.restaurant_id,
            "ID do restaurante é obrigatório",
        ) {
            errors.check(
                "restauranteId",
                &RangeRule::min(1_i64).with_message("ID do restaurante deve ser positivo"),
                Some(id),
            );
        }

        required(
            &mut errors,
            "quantidadeEstoque",
            &self.stock,
            "Quantidade em estoque é obrigatória",
        );

        finish("product", errors)
    }
}

/// Customer registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomerRequest {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "endereco")]
    pub address: Option<String>,
    #[serde(rename = "senha", default, skip_serializing)]
    pub password: Option<String>,
}

impl Validate for CustomerRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(name) =
            required_text(&mut errors, "nome", self.name.as_deref(), "Nome é obrigatório")
        {
            errors.check(
                "nome",
                &LengthRule::new(2, 100).with_message("Nome deve ter entre 2 e 100 caracteres"),
                Some(name),
            );
        }

        if let Some(phone) = required_text(
            &mut errors,
            "telefone",
            self.phone.as_deref(),
            "Telefone é obrigatório",
        ) {
            errors.check(
                "telefone",
                &RegexRule::new(r"^[0-9]{10,11}$")
                    .with_message("Telefone deve ter 10 ou 11 dígitos"),
                Some(phone),
            );
        }

        if let Some(email) =
            required_text(&mut errors, "email", self.email.as_deref(), "Email é obrigatório")
        {
            errors.check(
                "email",
                &EmailRule::new().with_message("Email deve ter formato válido"),
                Some(email),
            );
            errors.check(
                "email",
                &LengthRule::max(100).with_message("Email não pode ter mais de 100 caracteres"),
                Some(email),
            );
        }

        required_bounded(
            &mut errors,
            "endereco",
            self.address.as_deref(),
            "Endereço é obrigatório",
            255,
            "Endereço não pode ter mais de 255 caracteres",
        );

        finish("customer", errors)
    }
}

/// One line of an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItemRequest {
    #[serde(rename = "produtoId")]
    pub product_id: Option<i64>,
    #[serde(rename = "quantidade")]
    pub quantity: Option<i32>,
}

impl Validate for OrderItemRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        required(
            &mut errors,
            "produtoId",
            &self.product_id,
            "ID do produto é obrigatório",
        );

        if let Some(quantity) = required(
            &mut errors,
            "quantidade",
            &self.quantity,
            "Quantidade é obrigatória",
        ) {
            errors.check(
                "quantidade",
                &RangeRule::min(1).with_message("Quantidade deve ser maior que zero"),
                Some(quantity),
            );
        }

        finish("order_item", errors)
    }
}

/// Order placement: customer, restaurant, delivery address and items.
///
/// Errors of the nested address and items are reported under prefixed
/// names, e.g. `enderecoEntrega.cep` or `itens[1].quantidade`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    #[serde(rename = "clienteId")]
    pub customer_id: Option<i64>,
    #[serde(rename = "restauranteId")]
    pub restaurant_id: Option<i64>,
    #[serde(rename = "enderecoEntrega")]
    pub delivery_address: Option<AddressRequest>,
    #[serde(rename = "itens")]
    pub items: Option<Vec<OrderItemRequest>>,
}

impl Validate for OrderRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        required(
            &mut errors,
            "clienteId",
            &self.customer_id,
            "ID do cliente é obrigatório",
        );
        required(
            &mut errors,
            "restauranteId",
            &self.restaurant_id,
            "ID do restaurante é obrigatório",
        );

        if let Some(address) = required(
            &mut errors,
            "enderecoEntrega",
            &self.delivery_address,
            "Endereço de entrega é obrigatório",
        ) {
            if let Err(nested) = address.validate() {
                errors.merge_nested("enderecoEntrega", nested);
            }
        }

        if let Some(items) = required(&mut errors, "itens", &self.items, "Itens são obrigatórios")
        {
            for (i, item) in items.iter().enumerate() {
                if let Err(nested) = item.validate() {
                    errors.merge_nested(&format!("itens[{i}]"), nested);
                }
            }
        }

        finish("order", errors)
    }
}
