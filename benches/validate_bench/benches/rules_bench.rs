//! Rule evaluation benchmarks
//!
//! Measures single-value checks for the table-backed and regex-backed
//! rules, and whole-request validation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use delivery_validate::prelude::*;
use delivery_validate::requests::RestaurantRequest;
use rust_decimal::Decimal;

fn bench_text_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_rules");

    let cases: [(&str, Box<dyn ValidationRule<str>>, &str); 6] = [
        ("cep", Box::new(CepRule::new()), "01310-100"),
        ("phone", Box::new(PhoneRule::new()), "(11) 99999-9999"),
        ("state", Box::new(StateRule::new()), " sp "),
        ("email", Box::new(EmailRule::new()), "joao.silva@empresa.com.br"),
        ("name", Box::new(NameRule::default()), "Ana Luísa D'Ávila-Araújo"),
        ("category", Box::new(CategoryRule::restaurant()), "  fast   FOOD "),
    ];

    for (name, rule, value) in cases.iter() {
        group.bench_with_input(BenchmarkId::new("validate", name), value, |b, value| {
            b.iter(|| rule.validate(black_box(value)))
        });
    }

    group.finish();
}

fn bench_numeric_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("numeric_rules");

    let price = PriceRule::default();
    let amount = Decimal::new(4590, 2);
    group.bench_function("price", |b| b.iter(|| price.validate(black_box(&amount))));

    let rating = RatingRule::default();
    let score = Decimal::new(45, 1);
    group.bench_function("rating", |b| b.iter(|| rating.validate(black_box(&score))));

    let delivery = DeliveryTimeRule::default();
    group.bench_function("delivery_time", |b| {
        b.iter(|| delivery.validate(black_box(&135)))
    });

    group.finish();
}

fn bench_request(c: &mut Criterion) {
    let valid: RestaurantRequest = serde_json::from_str(
        r#"{
            "nome": "Cantina da Nona",
            "categoria": "italiana",
            "endereco": "Rua Augusta, 500",
            "taxaEntrega": "6.90",
            "tempoEntregaMinutos": 40,
            "telefone": "(11) 98765-4321",
            "email": "contato@cantina.com.br",
            "avaliacao": "4.5"
        }"#,
    )
    .unwrap_or_default();

    let invalid = RestaurantRequest {
        category: Some("Unicornio".to_string()),
        delivery_time_minutes: Some(33),
        phone: Some("(00) 1234-5678".to_string()),
        ..valid.clone()
    };

    let mut group = c.benchmark_group("restaurant_request");
    group.bench_function("valid", |b| b.iter(|| black_box(&valid).validate()));
    group.bench_function("invalid", |b| b.iter(|| black_box(&invalid).validate()));
    group.finish();
}

criterion_group!(benches, bench_text_rules, bench_numeric_rules, bench_request);
criterion_main!(benches);
