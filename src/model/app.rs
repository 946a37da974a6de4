use super::{Column, Docs, Resource};
use crate::sql::SqlValue;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct App {
    pub id: i64,
    pub nome: Option<String>,
    pub versao: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct AppPayload {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub versao: Option<String>,
}

impl Resource for App {
    type Payload = AppPayload;

    const TABLE: &'static str = "app";
    const PK: &'static str = "id_app";
    const COLUMNS: &'static [Column] = &[
        Column::text("nm_app", "nome")
            .required_msg("O nome do app não pode estar vazio")
            .max_length(50),
        Column::text("versao_app", "versao")
            .required_msg("A versão do app não pode estar vazia")
            .max_length(50),
    ];
    const PATH: &'static str = "apps";
    const SINGULAR: &'static str = "app";
    const NOT_FOUND: &'static str = "App não encontrado";
    const SCHEMA: &'static str = "App";
    const PAYLOAD_SCHEMA: &'static str = "AppPayload";
    const DOCS: Docs = Docs {
        tag: "App",
        list: "Lista todos os apps",
        get: "Obtém detalhes de um app específico",
        create: "Cria um novo app",
        update: "Atualiza um app existente",
        delete: "Deleta um app existente",
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn values(p: &AppPayload) -> Vec<SqlValue> {
        vec![SqlValue::Text(p.nome.clone()), SqlValue::Text(p.versao.clone())]
    }
}
