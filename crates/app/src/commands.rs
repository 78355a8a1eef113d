use anyhow::{bail, Context};
use gastos_core::{format_brl, RecordStore};
use gastos_import::{classify, ingest, normalize_currency};
use gastos_storage::{load_records, save_records, DbPool};

/// Everything a command needs: the database and the key the records live under.
pub struct AppState {
    pub db: DbPool,
    pub storage_key: String,
}

impl AppState {
    async fn load(&self) -> anyhow::Result<RecordStore> {
        load_records(&self.db, &self.storage_key)
            .await
            .context("failed to load records")
    }

    async fn save(&self, store: &RecordStore) -> anyhow::Result<()> {
        save_records(&self.db, &self.storage_key, store)
            .await
            .context("failed to save records")
    }
}

/// Ingests pasted text and merges accepted rows in front of the stored ones.
pub async fn import_text(state: &AppState, raw: &str) -> anyhow::Result<String> {
    if raw.trim().is_empty() {
        return Ok("Cole os dados da planilha antes de processar.".to_string());
    }

    let outcome = ingest(raw);
    if outcome.records.is_empty() {
        return Ok("Nenhuma linha válida encontrada. Verifique o formato.".to_string());
    }

    let mut store = state.load().await?;
    let imported = outcome.records.len();
    store.prepend(outcome.records);
    state.save(&store).await?;
    tracing::info!(imported, ignored = outcome.ignored_count, total = store.len(), "import saved");

    let ignored = match outcome.ignored_count {
        0 => String::new(),
        n => format!(" ({n} linha(s) ignoradas)"),
    };
    Ok(format!("Importação concluída com sucesso!{ignored}"))
}

pub async fn list(state: &AppState) -> anyhow::Result<String> {
    let store = state.load().await?;
    if store.is_empty() {
        return Ok(format!("Nenhum gasto registrado ainda.\nTotal: {}", format_brl(store.total())));
    }

    let mut out = String::new();
    for (idx, r) in store.records().iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:<10}  {:<40}  {:<26}  {:>16}\n",
            idx + 1,
            r.date,
            r.description,
            r.category,
            format_brl(r.value),
        ));
    }
    out.push_str(&format!("Total: {}", format_brl(store.total())));
    Ok(out)
}

pub async fn export_json(state: &AppState) -> anyhow::Result<String> {
    let store = state.load().await?;
    store.encode().context("failed to encode records")
}

/// Deletes the record at a 1-based position as shown by `list`.
pub async fn delete(state: &AppState, position: usize) -> anyhow::Result<String> {
    let mut store = state.load().await?;
    let Some(removed) = position.checked_sub(1).and_then(|idx| store.remove(idx)) else {
        bail!("registro {position} não existe");
    };
    state.save(&store).await?;
    Ok(format!(
        "Registro removido: {} {} {}",
        removed.date,
        removed.description,
        format_brl(removed.value)
    ))
}

/// Removes every record. Without `confirmed` nothing is touched.
pub async fn clear(state: &AppState, confirmed: bool) -> anyhow::Result<String> {
    let mut store = state.load().await?;
    if store.is_empty() {
        return Ok("Nenhum dado salvo para remover.".to_string());
    }
    if !confirmed {
        return Ok(format!(
            "Isso removerá {} registro(s). Use --yes para confirmar.",
            store.len()
        ));
    }

    let removed = store.clear();
    state.save(&store).await?;
    tracing::info!(removed, "records cleared");
    Ok("Todos os gastos foram removidos.".to_string())
}

pub fn classify_description(description: &str, amount: Option<&str>) -> anyhow::Result<String> {
    let amount = match amount {
        Some(raw) => match normalize_currency(raw) {
            Some(v) => Some(v),
            None => bail!("valor inválido: {raw}"),
        },
        None => None,
    };
    let label = classify(description, amount);
    serde_json::to_string(&label).context("failed to encode classification")
}
