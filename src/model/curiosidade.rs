use super::{Column, Docs, Resource};
use crate::sql::SqlValue;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fun fact card: title, image (URL or encoded data) and body text.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Curiosidade {
    pub id: i64,
    pub titulo: Option<String>,
    pub imagem: Option<String>,
    pub texto: Option<String>,
    pub app_id: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CuriosidadePayload {
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub imagem: Option<String>,
    #[serde(default)]
    pub texto: Option<String>,
    #[serde(default)]
    pub app_id: Option<i64>,
}

impl Resource for Curiosidade {
    type Payload = CuriosidadePayload;

    const TABLE: &'static str = "curiosidades";
    const PK: &'static str = "id_cs";
    const COLUMNS: &'static [Column] = &[
        Column::text("titulo_cs", "titulo")
            .required_msg("O titulo da curiosidade não pode estar vazio")
            .max_length(100),
        Column::text("imagem_cs", "imagem")
            .required_msg("A imagem da curiosidade não pode estar vazio"),
        Column::text("texto_cs", "texto")
            .required_msg("O texto da curiosidade não pode estar vazio"),
        Column::foreign_key("app_id_app", "app_id"),
    ];
    const PATH: &'static str = "curiosidades";
    const SINGULAR: &'static str = "curiosidade";
    const NOT_FOUND: &'static str = "Curiosidade não encontrada";
    const SCHEMA: &'static str = "Curiosidade";
    const PAYLOAD_SCHEMA: &'static str = "CuriosidadePayload";
    const DOCS: Docs = Docs {
        tag: "Curiosidade",
        list: "Lista todas as curiosidades",
        get: "Obtém detalhes de uma curiosidade específica",
        create: "Cria uma nova curiosidade",
        update: "Atualiza uma curiosidade existente",
        delete: "Deleta uma curiosidade existente",
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn values(p: &CuriosidadePayload) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(p.titulo.clone()),
            SqlValue::Text(p.imagem.clone()),
            SqlValue::Text(p.texto.clone()),
            SqlValue::BigInt(p.app_id),
        ]
    }
}
