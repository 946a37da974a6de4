use super::{Column, Docs, Resource};
use crate::sql::SqlValue;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registration of a cliente within an app.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Cadastro {
    pub id: i64,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
    pub app_id: Option<i64>,
    pub cliente_id: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CadastroPayload {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub senha: Option<String>,
    #[serde(default)]
    pub app_id: Option<i64>,
    #[serde(default)]
    pub cliente_id: Option<i64>,
}

impl Resource for Cadastro {
    type Payload = CadastroPayload;

    const TABLE: &'static str = "cadastro";
    const PK: &'static str = "id_cd";
    const COLUMNS: &'static [Column] = &[
        Column::text("nome_cd", "nome")
            .required_msg("O nome do cadastro não pode estar vazio")
            .max_length(100),
        Column::text("email_cd", "email")
            .required_msg("O email do cadastro não pode estar vazio")
            .max_length(100)
            .email(),
        Column::text("senha_cd", "senha")
            .required_msg("A senha não pode estar vazia")
            .max_length(100),
        Column::foreign_key("app_id_app", "app_id"),
        Column::foreign_key("cliente_cl_id", "cliente_id"),
    ];
    const PATH: &'static str = "cadastros";
    const SINGULAR: &'static str = "cadastro";
    const NOT_FOUND: &'static str = "Cadastro não encontrado";
    const SCHEMA: &'static str = "Cadastro";
    const PAYLOAD_SCHEMA: &'static str = "CadastroPayload";
    const DOCS: Docs = Docs {
        tag: "Cadastro",
        list: "Lista todos os cadastros",
        get: "Obtém detalhes de um cadastro específico",
        create: "Cria um novo cadastro",
        update: "Atualiza um cadastro existente",
        delete: "Deleta um cadastro existente",
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn values(p: &CadastroPayload) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(p.nome.clone()),
            SqlValue::Text(p.email.clone()),
            SqlValue::Text(p.senha.clone()),
            SqlValue::BigInt(p.app_id),
            SqlValue::BigInt(p.cliente_id),
        ]
    }
}
