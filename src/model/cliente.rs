use super::{Column, Docs, Resource};
use crate::sql::SqlValue;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Cliente {
    pub id: i64,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub app_id: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct ClientePayload {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Owning app; ignored on update.
    #[serde(default)]
    pub app_id: Option<i64>,
}

impl Resource for Cliente {
    type Payload = ClientePayload;

    const TABLE: &'static str = "cliente";
    const PK: &'static str = "cl_id";
    const COLUMNS: &'static [Column] = &[
        Column::text("nm_cl", "nome")
            .required_msg("O nome do cliente não pode estar vazio")
            .max_length(100),
        Column::text("email_cl", "email")
            .required_msg("O email do cliente não pode estar vazio")
            .max_length(100)
            .email(),
        Column::foreign_key("app_id_app", "app_id"),
    ];
    const PATH: &'static str = "clientes";
    const SINGULAR: &'static str = "cliente";
    const NOT_FOUND: &'static str = "Cliente não encontrado";
    const SCHEMA: &'static str = "Cliente";
    const PAYLOAD_SCHEMA: &'static str = "ClientePayload";
    const DOCS: Docs = Docs {
        tag: "Cliente",
        list: "Lista todos os clientes",
        get: "Obtém detalhes de um cliente específico",
        create: "Cria um novo cliente",
        update: "Atualiza um cliente existente",
        delete: "Deleta um cliente existente",
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn values(p: &ClientePayload) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(p.nome.clone()),
            SqlValue::Text(p.email.clone()),
            SqlValue::BigInt(p.app_id),
        ]
    }
}
