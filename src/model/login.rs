use super::{Column, Docs, Resource};
use crate::sql::SqlValue;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Login {
    pub id: i64,
    pub email: Option<String>,
    pub senha: Option<String>,
    pub cadastro_id: Option<i64>,
    pub cliente_id: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct LoginPayload {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub senha: Option<String>,
    #[serde(default)]
    pub cadastro_id: Option<i64>,
    #[serde(default)]
    pub cliente_id: Option<i64>,
}

impl Resource for Login {
    type Payload = LoginPayload;

    const TABLE: &'static str = "login";
    const PK: &'static str = "id_lg";
    const COLUMNS: &'static [Column] = &[
        Column::text("email_lg", "email").required().max_length(100).email(),
        Column::text("senha_lg", "senha").required().max_length(100),
        Column::foreign_key("cadastro_id_cd", "cadastro_id"),
        Column::foreign_key("cliente_cl_id", "cliente_id"),
    ];
    const PATH: &'static str = "logins";
    const SINGULAR: &'static str = "login";
    const NOT_FOUND: &'static str = "Login não encontrado";
    const SCHEMA: &'static str = "Login";
    const PAYLOAD_SCHEMA: &'static str = "LoginPayload";
    const DOCS: Docs = Docs {
        tag: "Login",
        list: "Lista todos os logins",
        get: "Obtém detalhes de um login específico",
        create: "Cria um novo login",
        update: "Atualiza um login existente",
        delete: "Deleta um login existente",
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn values(p: &LoginPayload) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(p.email.clone()),
            SqlValue::Text(p.senha.clone()),
            SqlValue::BigInt(p.cadastro_id),
            SqlValue::BigInt(p.cliente_id),
        ]
    }
}
