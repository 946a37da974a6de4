use super::{Column, Docs, Resource};
use crate::sql::SqlValue;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Video {
    pub id: i64,
    pub titulo: Option<String>,
    pub link: Option<String>,
    pub app_id: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct VideoPayload {
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub app_id: Option<i64>,
}

impl Resource for Video {
    type Payload = VideoPayload;

    const TABLE: &'static str = "videos";
    const PK: &'static str = "id_vd";
    const COLUMNS: &'static [Column] = &[
        Column::text("titulo_vd", "titulo")
            .required_msg("O título do vídeo não pode estar vazio")
            .max_length(200),
        Column::text("link_vd", "link").required_msg("O link do vídeo não pode estar vazio"),
        Column::foreign_key("app_id_app", "app_id"),
    ];
    const PATH: &'static str = "videos";
    const SINGULAR: &'static str = "video";
    const NOT_FOUND: &'static str = "Vídeo não encontrado";
    const SCHEMA: &'static str = "Video";
    const PAYLOAD_SCHEMA: &'static str = "VideoPayload";
    const DOCS: Docs = Docs {
        tag: "Video",
        list: "Lista todos os vídeos",
        get: "Obtém detalhes de um vídeo específico",
        create: "Cria um novo vídeo",
        update: "Atualiza um vídeo existente",
        delete: "Deleta um vídeo existente",
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn values(p: &VideoPayload) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(p.titulo.clone()),
            SqlValue::Text(p.link.clone()),
            SqlValue::BigInt(p.app_id),
        ]
    }
}
