use crate::record::TransactionType;

pub const FALLBACK_EXPENSE_CATEGORY: &str = "Outros Gastos";
pub const FALLBACK_INCOME_CATEGORY: &str = "Outros Recebimentos";
pub const NO_DESCRIPTION: &str = "Sem descrição";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: &'static str,
    pub kind: TransactionType,
    pub terms: &'static [&'static str],
}

const fn expense(category: &'static str, terms: &'static [&'static str]) -> CategoryGroup {
    CategoryGroup { category, kind: TransactionType::Expense, terms }
}

const fn income(category: &'static str, terms: &'static [&'static str]) -> CategoryGroup {
    CategoryGroup { category, kind: TransactionType::Income, terms }
}

// Scanned in declaration order. Terms are lowercase substrings.
pub static TAXONOMY: &[CategoryGroup] = &[
    // ── Expenses ──────────────────────────────────────────────────────────────
    expense("Viagem por App", &["uber", "99", "99pop", "cabify", "indriver"]),
    expense(
        "Transporte Público",
        &["ônibus", "metro", "metrô", "trem", "passagem", "bilhete", "cptm", "sptrans", "top"],
    ),
    expense(
        "Combustível",
        &[
            "posto", "gasolina", "etanol", "combustível", "ipiranga", "shell", "br",
            "abastecimento", "petrobras",
        ],
    ),
    expense(
        "Manutenção Veicular",
        &[
            "mecânico", "oficina", "revisão", "pneu", "peças", "troca de óleo", "balanceamento",
            "funilaria", "bateria",
        ],
    ),
    expense(
        "Supermercado",
        &[
            "mercado", "supermercado", "hipermercado", "atacadao", "assai", "carrefour",
            "pão de açúcar", "dia", "extra", "sonda", "zaffari", "mambo", "tenda", "sams club",
        ],
    ),
    expense(
        "Alimentação Fora de Casa",
        &[
            "restaurante", "lanchonete", "padaria", "bar", "pub", "cafe", "coffee", "ifood",
            "rappi", "uber eats", "burger", "mcdonalds", "pizza", "sushi", "açaí", "sorvete",
            "starbucks", "outback",
        ],
    ),
    expense(
        "Streaming e Assinaturas",
        &[
            "netflix", "spotify", "youtube", "amazon prime", "disney", "hbo", "globoplay",
            "appletv", "paramount", "deezer", "assinatura", "adobe", "google one", "icloud",
        ],
    ),
    expense(
        "Lazer",
        &[
            "cinema", "ingresso", "show", "teatro", "museu", "parque", "clube", "steam",
            "playstation", "xbox", "nintendo", "jogo", "game", "sympla", "eventim",
        ],
    ),
    expense(
        "Despesa Fixa",
        &[
            "aluguel", "condomínio", "luz", "energia", "enel", "light", "cpfl", "água", "sabesp",
            "gás", "iptu", "net", "vivo", "claro", "tim", "internet", "oi", "celular", "conta",
            "mensalidade",
        ],
    ),
    expense(
        "Manutenção Residencial",
        &[
            "leroy", "telhanorte", "manutenção", "conserto", "eletricista", "encanador",
            "limpeza", "faxina", "diarista", "c&c", "sodimac", "casa e construção",
        ],
    ),
    expense(
        "Saúde",
        &[
            "farmácia", "drogaria", "drogasil", "raia", "pague menos", "ultrafarma",
            "medicamento", "remédio", "médico", "consulta", "exame", "laboratório", "hospital",
            "dentista", "ortodontista", "psicólogo", "terapia", "plano de saúde", "unimed",
            "sulamerica", "bradesco saude",
        ],
    ),
    expense(
        "Educação",
        &[
            "escola", "colégio", "faculdade", "universidade", "curso", "udemy", "alura",
            "coursera", "livro", "saraiva", "amazon", "papelaria", "material escolar", "idiomas",
            "inglês",
        ],
    ),
    expense(
        "Vestuário",
        &[
            "roupa", "vestuário", "sapato", "tênis", "camisa", "calça", "zara", "renner", "c&a",
            "riachuelo", "shein", "privalia", "dafiti", "nike", "adidas", "centauro",
        ],
    ),
    expense(
        "Seguros",
        &["seguro", "porto seguro", "azul seguros", "tokio marine", "allianz", "liberty", "suhai"],
    ),
    expense(
        "Serviços Profissionais",
        &["advogado", "contador", "consultoria", "cartório", "despachante"],
    ),
    expense(
        "Impostos e Taxas",
        &["iof", "tarifa", "anuidade", "juros", "taxa", "multa", "darf", "das", "irpf"],
    ),
    expense(
        "Cartão de Crédito",
        &["fatura", "cartão", "card", "visa", "mastercard", "amex", "nubank", "inter"],
    ),
    expense(
        "Compras Parceladas",
        &[
            "parcela", "1/", "2/", "3/", "4/", "5/", "6/", "7/", "8/", "9/", "10/", "11/", "12/",
        ],
    ),
    // ── Income ────────────────────────────────────────────────────────────────
    income("Salário", &["salário", "holerite", "proventos", "folha"]),
    income("Freelance", &["freela", "serviço prestado", "job", "projeto"]),
    income("Reembolso", &["reembolso", "estorno", "devolução", "cashback"]),
    income(
        "Renda Extra",
        &["venda", "aluguel recebido", "lucro", "dividendo", "rendimento", "jcp"],
    ),
];

/// Phrases that mark an unmatched description as money coming in.
pub static INCOME_HINTS: &[&str] = &[
    "salário",
    "recebido",
    "depósito recebido",
    "transferência recebida",
    "pix recebido",
    "resgate",
    "rendimento",
    "reembolso",
    "estorno",
    "cashback",
];

pub fn find_group(category: &str) -> Option<&'static CategoryGroup> {
    TAXONOMY.iter().find(|g| g.category == category)
}

/// Polarity implied by a category label alone.
pub fn type_for_category(category: &str) -> TransactionType {
    match find_group(category) {
        Some(group) => group.kind,
        None if category == FALLBACK_INCOME_CATEGORY => TransactionType::Income,
        None => TransactionType::Expense,
    }
}
